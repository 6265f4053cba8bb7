use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pat_router::{HttpRouter, Method, Router};

fn router_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-find");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("/hello/:name", 1);
        b.iter_with_large_drop(|| router.find("/hello/blake").map(|m| *m.0))
    });

    group.bench_function("trailing-slash-fallback", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("/hello/:name/", 1);
        b.iter_with_large_drop(|| router.find("/hello/blake").map(|m| *m.0))
    });

    group.bench_function("method-not-allowed", |b| {
        let mut router: HttpRouter<usize> = HttpRouter::new();
        router
            .insert(Method::POST, "/foo/:name", 1)
            .insert(Method::PUT, "/foo/:name", 2);
        b.iter(|| router.find(&Method::GET, "/foo/keith").is_none())
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.insert("/hello/:name", 1);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_find, router_insert);
criterion_main!(benches);
