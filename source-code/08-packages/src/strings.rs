//! Everyday `str` operations, collected as labelled rows.

/// Each row pairs an expression with the value it produces.
pub fn string_facts() -> Vec<(&'static str, String)> {
    vec![
        (r#""test".contains("es")"#, "test".contains("es").to_string()),
        (r#""test".matches("t").count()"#, "test".matches('t').count().to_string()),
        (r#""test".starts_with("te")"#, "test".starts_with("te").to_string()),
        (r#""test".ends_with("st")"#, "test".ends_with("st").to_string()),
        (r#""test".find("e")"#, format!("{:?}", "test".find('e'))),
        (r#""test".find("a")"#, format!("{:?}", "test".find('a'))),
        (r#"["a", "b"].join("-")"#, ["a", "b"].join("-")),
        (r#"["a", "b"].concat()"#, ["a", "b"].concat()),
        (r#""a".repeat(5)"#, "a".repeat(5)),
        (r#""aaaa".replacen("a", "b", 2)"#, "aaaa".replacen('a', "b", 2)),
        (
            r#""a-b-c-d-e".split("-")"#,
            format!("{:?}", "a-b-c-d-e".split('-').collect::<Vec<_>>()),
        ),
        (r#""TEST".to_lowercase()"#, "TEST".to_lowercase()),
        (r#""test".to_uppercase()"#, "test".to_uppercase()),
        (r#""test".as_bytes()"#, format!("{:?}", "test".as_bytes())),
        (
            r#"String::from_utf8_lossy(b"test")"#,
            String::from_utf8_lossy(b"test").into_owned(),
        ),
        (
            "chars ['t','e','s','t'] collected",
            ['t', 'e', 's', 't'].iter().collect::<String>(),
        ),
    ]
}
