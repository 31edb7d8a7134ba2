//! Tests for the request context.

#[cfg(test)]
mod context_tests {
    use std::collections::HashMap;

    use serde_json::json;

    use crate::context::{parse_query, Error, RequestContext};

    #[test]
    fn test_absolute_url() {
        let url = "https://example.com/items/42?unused=1";
        let ctx = RequestContext::new("GET", url, HashMap::new()).unwrap();
        assert_eq!(ctx.method(), "GET");
        assert_eq!(ctx.path(), "/items/42");
        assert_eq!(ctx.url().host_str(), Some("example.com"));
        assert_eq!(ctx.query_param("unused"), Some("1"));
    }

    #[test]
    fn test_origin_form_target() {
        let ctx = RequestContext::new("post", "/search?q=rust", HashMap::new()).unwrap();
        assert_eq!(ctx.path(), "/search");
        assert_eq!(ctx.url().as_str(), "http://localhost/search?q=rust");
        assert_eq!(ctx.query_param("q"), Some("rust"));
    }

    #[test]
    fn test_invalid_url() {
        let result = RequestContext::new("GET", "http://[::1", HashMap::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_repeated_query_keys_keep_order() {
        let ctx = RequestContext::new("GET", "/tags?t=a&x=1&t=b&t=c", HashMap::new()).unwrap();
        assert_eq!(ctx.query_params().get("t").unwrap(), &vec!["a", "b", "c"]);
        assert_eq!(ctx.query_param("t"), Some("a"));
    }

    #[test]
    fn test_query_decoding() {
        let params = parse_query("q=test%20query&name=john+doe&filter=name:john");
        assert_eq!(params.get("q").unwrap(), &vec!["test query"]);
        assert_eq!(params.get("name").unwrap(), &vec!["john doe"]);
        assert_eq!(params.get("filter").unwrap(), &vec!["name:john"]);
    }

    #[test]
    fn test_blank_query_values_are_dropped() {
        let params = parse_query("q=test&flag&empty=");
        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("flag"));
        assert!(!params.contains_key("empty"));
    }

    #[test]
    fn test_missing_query() {
        let ctx = RequestContext::new("GET", "/plain", HashMap::new()).unwrap();
        assert!(ctx.query_params().is_empty());
        assert_eq!(ctx.query_param("anything"), None);
    }

    #[test]
    fn test_case_insensitive_header_lookup() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        let ctx = RequestContext::new("GET", "/", headers).unwrap();

        assert_eq!(ctx.header("content-type"), Some("text/plain"));
        assert_eq!(ctx.header("CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(ctx.header("Accept"), None);
        assert_eq!(ctx.headers().len(), 1);
    }

    #[test]
    fn test_env_passthrough() {
        let ctx = RequestContext::new("GET", "/", HashMap::new()).unwrap();
        assert!(ctx.env().is_null());

        let ctx = ctx.with_env(json!({"region": "eu"}));
        assert_eq!(ctx.env()["region"], "eu");
    }

    #[test]
    fn test_target_resolved_against_host() {
        let ctx = RequestContext::from_target(
            "GET",
            Some("example.com:8080"),
            "/items/7?x=1",
            HashMap::new(),
        )
        .unwrap();
        assert_eq!(ctx.url().as_str(), "http://example.com:8080/items/7?x=1");
        assert_eq!(ctx.path(), "/items/7");
        assert_eq!(ctx.query_param("x"), Some("1"));
    }

    #[test]
    fn test_host_cannot_change_the_path() {
        let hosts = [
            "localhost/items",
            "localhost#",
            "localhost?x=1",
            "user@localhost",
            "a b",
        ];
        for host in hosts {
            let result = RequestContext::from_target("GET", Some(host), "/7", HashMap::new());
            assert!(
                matches!(result, Err(Error::InvalidHost(ref h)) if h == host),
                "host {host:?} was accepted"
            );
        }
    }

    #[test]
    fn test_absolute_target_ignores_host() {
        let ctx = RequestContext::from_target(
            "GET",
            Some("localhost/evil"),
            "http://example.com/a?b=c",
            HashMap::new(),
        )
        .unwrap();
        assert_eq!(ctx.path(), "/a");
        assert_eq!(ctx.url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_path_keeps_dot_segments_and_escapes() {
        let ctx = RequestContext::new("GET", "/files/..", HashMap::new()).unwrap();
        assert_eq!(ctx.path(), "/files/..");

        let ctx = RequestContext::new("GET", "/files/%2e%2e?x=1#frag", HashMap::new()).unwrap();
        assert_eq!(ctx.path(), "/files/%2e%2e");

        let ctx = RequestContext::new("GET", "http://example.com/a/../b", HashMap::new()).unwrap();
        assert_eq!(ctx.path(), "/a/../b");

        let ctx = RequestContext::new("GET", "http://example.com?q=1", HashMap::new()).unwrap();
        assert_eq!(ctx.path(), "/");
    }

    #[test]
    fn test_network_path_target_stays_on_host() {
        let ctx = RequestContext::new("GET", "//evil.com/x", HashMap::new()).unwrap();
        assert_eq!(ctx.url().host_str(), Some("localhost"));
        assert_eq!(ctx.path(), "//evil.com/x");
    }
}
