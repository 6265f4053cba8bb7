#[macro_export]
macro_rules! router_service {
    {$($method:ident $pattern:expr => $handler:expr),+ $(,)? ; _ => $not_found:expr} => {{
        let mut __service = $crate::RouterService::new();
        $(__service.route($crate::Method::$method, $pattern, $handler);)+
        __service.not_found($not_found);
        __service
    }};

    {$($method:ident $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __service = $crate::RouterService::new();
        $(__service.route($crate::Method::$method, $pattern, $handler);)+
        __service
    }};
}
