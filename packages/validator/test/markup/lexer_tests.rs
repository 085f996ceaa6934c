//! Markup lexer tests.

#[cfg(test)]
mod tests {
    use markup_validator::markup::lexer::{decode_entities, tokenize, Token};

    fn open(name: &str, attributes: Vec<(&str, &str)>, self_closing: bool) -> Token {
        Token::TagOpen {
            name: name.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            self_closing,
        }
    }

    fn close(name: &str) -> Token {
        Token::TagClose {
            name: name.to_string(),
        }
    }

    fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    mod tags {
        use super::*;

        #[test]
        fn should_tokenize_a_simple_element() {
            let tokens = tokenize("<p>hi</p>").unwrap();
            assert_eq!(tokens, vec![open("p", vec![], false), text("hi"), close("p")]);
        }

        #[test]
        fn should_tokenize_self_closing_tags() {
            let tokens = tokenize("<br/>").unwrap();
            assert_eq!(tokens, vec![open("br", vec![], true)]);
        }

        #[test]
        fn should_allow_whitespace_inside_tags() {
            let tokens = tokenize("<p  >x</p >").unwrap();
            assert_eq!(tokens, vec![open("p", vec![], false), text("x"), close("p")]);
        }

        #[test]
        fn should_tokenize_custom_element_names() {
            let tokens = tokenize("<my-button></my-button>").unwrap();
            assert_eq!(tokens, vec![open("my-button", vec![], false), close("my-button")]);
        }

        #[test]
        fn should_reject_invalid_tag_names() {
            let err = tokenize("<1p></1p>").unwrap_err();
            assert!(err.message.contains("invalid tag name"), "{}", err.message);
        }

        #[test]
        fn should_reject_unterminated_open_tags() {
            let err = tokenize("<p class=\"x\"").unwrap_err();
            assert!(err.message.contains("unexpected end of markup"), "{}", err.message);
        }

        #[test]
        fn should_reject_malformed_closing_tags() {
            let err = tokenize("<p>x</p attr>").unwrap_err();
            assert!(err.message.contains("malformed closing tag"), "{}", err.message);
        }
    }

    mod attributes {
        use super::*;

        #[test]
        fn should_tokenize_double_quoted_attributes() {
            let tokens = tokenize("<a href=\"/index.html\">x</a>").unwrap();
            assert_eq!(
                tokens[0],
                open("a", vec![("href", "/index.html")], false)
            );
        }

        #[test]
        fn should_tokenize_single_quoted_attributes() {
            let tokens = tokenize("<a href='/index.html'></a>").unwrap();
            assert_eq!(
                tokens[0],
                open("a", vec![("href", "/index.html")], false)
            );
        }

        #[test]
        fn should_tokenize_multiple_attributes() {
            let tokens = tokenize("<img src=\"x.png\" alt=\"Logo\">").unwrap();
            assert_eq!(
                tokens[0],
                open("img", vec![("src", "x.png"), ("alt", "Logo")], false)
            );
        }

        #[test]
        fn should_tokenize_boolean_attributes() {
            let tokens = tokenize("<input disabled>").unwrap();
            assert_eq!(tokens[0], open("input", vec![("disabled", "")], false));
        }

        #[test]
        fn should_tokenize_unquoted_attribute_values() {
            let tokens = tokenize("<td colspan=2></td>").unwrap();
            assert_eq!(tokens[0], open("td", vec![("colspan", "2")], false));
        }

        #[test]
        fn should_keep_quotes_of_the_other_kind_inside_values() {
            let tokens = tokenize("<p onclick=\"alert('hi')\"></p>").unwrap();
            assert_eq!(
                tokens[0],
                open("p", vec![("onclick", "alert('hi')")], false)
            );
        }

        #[test]
        fn should_decode_entities_in_attribute_values() {
            let tokens = tokenize("<p title=\"a &amp; b\"></p>").unwrap();
            assert_eq!(tokens[0], open("p", vec![("title", "a & b")], false));
        }

        #[test]
        fn should_reject_unterminated_attribute_values() {
            let err = tokenize("<p class=\"x></p>").unwrap_err();
            assert!(err.message.contains("unterminated value"), "{}", err.message);
        }
    }

    mod text_and_entities {
        use super::*;

        #[test]
        fn should_decode_named_entities_in_text() {
            let tokens = tokenize("<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>").unwrap();
            assert_eq!(tokens[1], text("1 < 2 && 3 > 2"));
        }

        #[test]
        fn should_decode_numeric_entities() {
            assert_eq!(decode_entities("&#65;&#x42;"), "AB");
            assert_eq!(decode_entities("&#x1F6C8;"), "\u{1F6C8}");
        }

        #[test]
        fn should_leave_unknown_entities_alone() {
            assert_eq!(decode_entities("&nope; & plain"), "&nope; & plain");
        }

        #[test]
        fn should_preserve_whitespace_in_text() {
            let tokens = tokenize("<p>  a \n b  </p>").unwrap();
            assert_eq!(tokens[1], text("  a \n b  "));
        }
    }

    mod comments {
        use super::*;

        #[test]
        fn should_skip_comments() {
            let tokens = tokenize("<p>a<!-- note -->b</p>").unwrap();
            assert_eq!(
                tokens,
                vec![open("p", vec![], false), text("a"), text("b"), close("p")]
            );
        }

        #[test]
        fn should_reject_unterminated_comments() {
            let err = tokenize("<p><!-- oops</p>").unwrap_err();
            assert!(err.message.contains("unterminated comment"), "{}", err.message);
        }

        #[test]
        fn should_reject_markup_declarations() {
            let err = tokenize("<!DOCTYPE html><p></p>").unwrap_err();
            assert!(err.message.contains("unsupported markup declaration"), "{}", err.message);
        }
    }
}
