//! Markup tree builder tests.

#[cfg(test)]
mod tests {
    use markup_validator::markup::{parse, MarkupNode};

    mod structure {
        use super::*;

        #[test]
        fn should_parse_a_single_element_with_text() {
            let tree = parse("<p>Hello</p>").unwrap();
            assert_eq!(tree, MarkupNode::new("p").with_text("Hello"));
        }

        #[test]
        fn should_parse_nested_children_in_document_order() {
            let tree = parse("<div><h1>a</h1><p>b</p></div>").unwrap();
            assert_eq!(tree.tag, "div");
            assert_eq!(tree.children.len(), 2);
            assert_eq!(tree.children[0].tag, "h1");
            assert_eq!(tree.children[1].tag, "p");
        }

        #[test]
        fn should_assign_text_and_tails_like_a_document_stream() {
            let tree = parse("<div>a<b>c</b>d</div>").unwrap();
            assert_eq!(tree.text.as_deref(), Some("a"));
            assert_eq!(tree.children[0].text.as_deref(), Some("c"));
            assert_eq!(tree.children[0].tail.as_deref(), Some("d"));
        }

        #[test]
        fn should_merge_text_split_by_comments() {
            let tree = parse("<p>a<!-- x -->b</p>").unwrap();
            assert_eq!(tree.text.as_deref(), Some("ab"));
        }

        #[test]
        fn should_parse_attributes_into_the_map() {
            let tree = parse("<a href=\"/\" class=\"nav\">x</a>").unwrap();
            assert_eq!(tree.attributes.get("href").map(String::as_str), Some("/"));
            assert_eq!(tree.attributes.get("class").map(String::as_str), Some("nav"));
        }

        #[test]
        fn should_keep_the_last_value_of_a_repeated_attribute() {
            let tree = parse("<p class=\"a\" class=\"b\"></p>").unwrap();
            assert_eq!(tree.attributes.get("class").map(String::as_str), Some("b"));
            assert_eq!(tree.attributes.len(), 1);
        }

        #[test]
        fn should_treat_void_elements_as_childless() {
            let tree = parse("<div>a<br>b</div>").unwrap();
            assert_eq!(tree.children.len(), 1);
            assert_eq!(tree.children[0].tag, "br");
            assert!(tree.children[0].children.is_empty());
            assert_eq!(tree.children[0].tail.as_deref(), Some("b"));
        }

        #[test]
        fn should_parse_self_closing_elements() {
            let tree = parse("<div><span/>x</div>").unwrap();
            assert_eq!(tree.children[0].tag, "span");
            assert_eq!(tree.children[0].tail.as_deref(), Some("x"));
        }

        #[test]
        fn should_ignore_whitespace_around_the_root() {
            let tree = parse("\n  <p>x</p>\n").unwrap();
            assert_eq!(tree.tag, "p");
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn equal_serializations_parse_to_equal_trees() {
            let a = parse("<div><p class=\"x\">t</p></div>").unwrap();
            let b = parse("<div><p class=\"x\">t</p></div>").unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn attribute_order_does_not_affect_equality() {
            let a = parse("<p class=\"x\" id=\"y\"></p>").unwrap();
            let b = parse("<p id=\"y\" class=\"x\"></p>").unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn descendants_iterate_in_document_order() {
            let tree = parse("<div><a><b></b></a><c></c></div>").unwrap();
            let tags: Vec<&str> = tree.descendants().map(|n| n.tag.as_str()).collect();
            assert_eq!(tags, vec!["a", "b", "c"]);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn should_reject_mismatched_closing_tags() {
            let err = parse("<div><p>x</div></p>").unwrap_err();
            assert!(
                err.message.contains("unexpected closing tag </div>"),
                "{}",
                err.message
            );
        }

        #[test]
        fn should_reject_unclosed_elements() {
            let err = parse("<div><p>x").unwrap_err();
            assert!(err.message.contains("unclosed <p> element"), "{}", err.message);
        }

        #[test]
        fn should_reject_stray_closing_tags() {
            let err = parse("<p>x</p></div>").unwrap_err();
            assert!(
                err.message.contains("unexpected closing tag </div>"),
                "{}",
                err.message
            );
        }

        #[test]
        fn should_reject_multiple_roots() {
            let err = parse("<p>a</p><p>b</p>").unwrap_err();
            assert!(err.message.contains("multiple root elements"), "{}", err.message);
        }

        #[test]
        fn should_reject_text_outside_the_root() {
            let err = parse("hello <p>x</p>").unwrap_err();
            assert!(err.message.contains("text outside of root"), "{}", err.message);
        }

        #[test]
        fn should_reject_empty_input() {
            let err = parse("").unwrap_err();
            assert!(err.message.contains("no root element"), "{}", err.message);
        }
    }
}
