//! Rendering properties of statements and option maps

use serde_json::json;
use wiquery::ui::ProgressBar;
use wiquery::{Error, JsQuery, JsStatement, MarkupId, Options, Plugin};

const IDS: [&str; 4] = ["anId", "main-panel", "x_1", "Ünïcode"];
const SELECTORS: [&str; 3] = ["li", "span.label", "> tr:first"];

#[test]
fn test_bare_selector_renders_id() {
    for id in IDS {
        let query = JsQuery::new(MarkupId::new(id).unwrap());
        assert_eq!(query.select().render(), format!("$('#{id}');"));
    }
}

#[test]
fn test_descendant_selector_renders_within_id() {
    for id in IDS {
        let query = JsQuery::new(MarkupId::new(id).unwrap());
        for selector in SELECTORS {
            assert_eq!(
                query.select_within(selector).render(),
                format!("$('#{id} {selector}');")
            );
        }
    }
}

#[test]
fn test_document_root() {
    assert_eq!(JsStatement::for_document().render(), "$(document);");
}

#[test]
fn test_unterminated_render_strips_only_the_semicolon() {
    let id = MarkupId::new("anId").unwrap();
    let statements = [
        JsStatement::for_markup(&id, None),
        JsStatement::for_markup(&id, Some("li")).css("color", "red").add_class("on"),
        JsStatement::for_document().chain("trigger", &["'ready'"]),
        JsStatement::new().append("$('#a').hide();"),
        JsStatement::new()
            .append(JsStatement::for_markup(&id, None).chain("hide", &[]).render())
            .append(JsStatement::for_document().chain("trigger", &["'ready'"]).render()),
    ];
    for statement in statements {
        let terminated = statement.render();
        assert_eq!(terminated.strip_suffix(';'), Some(statement.render_semicolon(false).as_str()));
    }
}

#[test]
fn test_options_keep_insertion_order_and_render_stably() {
    let mut options = Options::new();
    options.put("b", 1).put("a", true).put("c", "text").put_literal("d", "'pre-quoted'");

    let first = options.javascript_options();
    assert_eq!(first, "{b: 1, a: true, c: 'text', d: 'pre-quoted'}");
    assert_eq!(options.javascript_options(), first);

    options.put("b", 2);
    assert_eq!(options.javascript_options(), "{b: 2, a: true, c: 'text', d: 'pre-quoted'}");
}

#[test]
fn test_unsupported_option_value_fails_fast() {
    let object = json!({ "ok": 1, "bad": [1, 2] });
    let err = Options::from_json_object(object.as_object().unwrap()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOptionValue { ref key, .. } if key == "bad"));
}

#[test]
fn test_progressbar_scenario() {
    let mut bar = ProgressBar::new(MarkupId::new("anId").unwrap());
    bar.set_value(42);
    assert_eq!(bar.statement().render(), "$('#anId').progressbar();{value: 42}");
}
