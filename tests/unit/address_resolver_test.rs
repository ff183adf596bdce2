//! Unit tests for address bar input resolution and title derivation.

use rstest::rstest;

use tabspace::services::address_resolver::{derive_title, resolve_input, ResolvedInput};

const SEARCH: &str = "https://search.example/?q=";

#[rstest]
#[case("https://github.com", "https://github.com")]
#[case("  HTTP://Example.com/a b ", "HTTP://Example.com/a b")]
#[case("about:blank", "about:blank")]
#[case("file:///tmp/index.html", "file:///tmp/index.html")]
#[case("github.com", "https://github.com")]
#[case("docs.rs/serde/latest", "https://docs.rs/serde/latest")]
#[case("my-site.co.uk:8443/path", "https://my-site.co.uk:8443/path")]
#[case("localhost:3000", "http://localhost:3000")]
#[case("127.0.0.1:8080/api", "http://127.0.0.1:8080/api")]
#[case("", "about:blank")]
fn test_navigate_inputs(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(
        resolve_input(input, SEARCH),
        ResolvedInput::Navigate {
            url: expected.to_string()
        }
    );
}

#[rstest]
#[case("rust borrow checker", "https://search.example/?q=rust+borrow+checker")]
#[case("rust", "https://search.example/?q=rust")]
#[case("1.5", "https://search.example/?q=1.5")]
#[case("what is 2+2?", "https://search.example/?q=what+is+2%2B2%3F")]
#[case("github.com is down", "https://search.example/?q=github.com+is+down")]
#[case("fish & chips", "https://search.example/?q=fish+%26+chips")]
fn test_search_inputs(#[case] input: &str, #[case] expected_url: &str) {
    match resolve_input(input, SEARCH) {
        ResolvedInput::Search { query, url } => {
            assert_eq!(query, input.trim());
            assert_eq!(url, expected_url);
        }
        other => panic!("expected search, got {:?}", other),
    }
}

#[rstest]
#[case("about:blank", "New Tab")]
#[case("", "New Tab")]
#[case("about:welcome", "Welcome")]
#[case("https://www.github.com/rust-lang", "github.com")]
#[case("https://en.wikipedia.org/wiki/Tab", "en.wikipedia.org")]
#[case("http://localhost:3000/", "localhost")]
#[case("file:///tmp/index.html", "file:///tmp/index.html")]
#[case("not a url", "not a url")]
fn test_derive_title(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(derive_title(url), expected);
}
