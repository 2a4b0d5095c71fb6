#[macro_export]
macro_rules! client {
    ($cfg:expr) => {{
        let mut builder = Client::builder().user_agent(&$cfg.extractor_user_agent);
        if let Some(timeout) = $cfg.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }};
    ($cfg:expr, $jar:expr) => {{
        let mut builder = Client::builder()
            .user_agent(&$cfg.extractor_user_agent)
            .cookie_provider($jar);
        if let Some(timeout) = $cfg.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }};
}

#[macro_export]
macro_rules! join_tags {
    ($x:expr) => {{
        let tl = $x.join("+");
        tl
    }};
}
