mod common;

use common::recording_context;
use oxide_form_helpers::{
    options_from_pairs, Element, ElementHelper, FormButton, FormCheckbox, FormSelect, Layout,
    RenderContext,
};

#[test]
fn button_open_tag_keeps_button_type() {
    let ctx = RenderContext::new();
    let element = Element::button("test-button").attr("type", "button");
    assert_eq!(
        FormButton.open_tag(&ctx, &element).unwrap(),
        r#"<button type="button" name="test-button">"#
    );
}

#[test]
fn button_without_label_or_content_fails() {
    let ctx = RenderContext::new();
    let element = Element::button("b");
    assert!(FormButton.render_with_content(&ctx, &element, None).is_err());
    assert_eq!(
        FormButton
            .render_with_content(&ctx, &element, Some("Go & see"))
            .unwrap(),
        r#"<button name="b" type="submit">Go &amp; see</button>"#
    );
}

#[test]
fn inline_checkbox_wraps_input_and_label() {
    let ctx = RenderContext::new();
    let element = Element::checkbox("chkbox")
        .attr("class", "xyz")
        .checked_value("")
        .use_hidden_element(false)
        .checked(true)
        .label("escaped-label")
        .layout(Layout::Inline);
    assert_eq!(
        FormCheckbox.render(&ctx, &element).unwrap(),
        concat!(
            "<div class=\"form-check form-check-inline\">\n",
            "    <label>\n",
            "        <input class=\"form-check-input xyz\" name=\"chkbox\" type=\"checkbox\" value=\"\" checked=\"checked\">\n",
            "        <span>escaped-label</span>\n",
            "    </label>\n",
            "</div>"
        )
    );
}

#[test]
fn select_with_empty_option_escapes_labels() {
    let (ctx, escaper) = recording_context();
    let element = Element::select("sel", options_from_pairs([("abc", "def")]))
        .empty_option("0")
        .unselected_value("");
    assert_eq!(
        FormSelect.render(&ctx, &element).unwrap(),
        concat!(
            "<select class=\"form-select\" name=\"sel\">\n",
            "    <option value=\"\">0</option>\n",
            "    <option value=\"abc\">def</option>\n",
            "</select>"
        )
    );
    let seen = escaper.seen();
    assert!(seen.iter().any(|s| s == "0"));
    assert!(seen.iter().any(|s| s == "def"));
}
