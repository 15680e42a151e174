pub fn pagination_max_count() -> Option<u32> {
    use std::sync::OnceLock;
    static PAGINATION_MAX_COUNT: OnceLock<Option<u32>> = OnceLock::new();
    *PAGINATION_MAX_COUNT.get_or_init(|| {
        std::env::var("PAGINATION_MAX_COUNT")
            .ok()
            .and_then(|count| parse_max_count(&count))
    })
}

fn parse_max_count(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(value, %err, "ignoring PAGINATION_MAX_COUNT, expected a non-negative integer");
            None
        }
    }
}
