//! Template binder: selects the template for the active mode and binds items into it

use crate::config::ListingSettings;
use crate::dataset::Item;
use crate::rendering::{Bindings, RenderError, TemplateEngine};

/// Renders items, listings and item cards for one effective settings context
pub struct TemplateBinder<'a> {
    engine: &'a dyn TemplateEngine,
    settings: &'a ListingSettings,
}

impl<'a> TemplateBinder<'a> {
    pub fn new(engine: &'a dyn TemplateEngine, settings: &'a ListingSettings) -> Self {
        Self { engine, settings }
    }

    /// Render one listing entry with the item template of the active mode
    pub fn render_item(&self, item: &Item) -> Result<String, RenderError> {
        let template = self
            .settings
            .item_templates
            .get(&self.settings.mode)
            .ok_or(RenderError::UnknownMode(self.settings.mode))?;

        self.render_template(template, &Bindings::for_item(item, self.settings))
    }

    /// Render `items` in order and wrap them in the container template of the active mode
    pub fn render_listing(&self, items: &[Item]) -> Result<String, RenderError> {
        let container = self
            .settings
            .templates
            .get(&self.settings.mode)
            .ok_or(RenderError::UnknownMode(self.settings.mode))?;

        let mut list = String::from("\n");
        for item in items {
            list.push_str(&self.render_item(item)?);
            list.push('\n');
        }

        let mut bindings = Bindings::for_settings(self.settings);
        bindings.add_variable("list", list);

        self.render_template(container, &bindings)
    }

    /// Render a standalone card for a single item
    pub fn render_card(&self, item: &Item) -> Result<String, RenderError> {
        self.render_template(
            &self.settings.item_card,
            &Bindings::for_item(item, self.settings),
        )
    }

    fn render_template(&self, template: &str, bindings: &Bindings) -> Result<String, RenderError> {
        self.engine.render(&prepare_template(template), bindings)
    }
}

/// Trim surrounding tabs and line breaks and undo `&lt;`/`&gt;` escaping
/// left by upstream markup handling.
pub fn prepare_template(template: &str) -> String {
    template
        .trim_matches(|c| matches!(c, '\t' | '\r' | '\n'))
        .replace("&gt;", ">")
        .replace("&lt;", "<")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use crate::rendering::TeraTemplateEngine;

    fn tool() -> Item {
        Item {
            title: Some("Tool".to_string()),
            url: Some("http://x/y".to_string()),
            kind: Some("git".to_string()),
            version: Some("1.0".to_string()),
            ..Item::named("tool")
        }
    }

    #[test]
    fn test_render_item_without_password_has_no_password_block() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings::default();
        let binder = TemplateBinder::new(&engine, &settings);

        let html = binder.render_item(&tool()).unwrap();
        assert!(html.contains("Tool"));
        assert!(html.contains("version 1.0"));
        assert!(!html.contains("password"));
    }

    #[test]
    fn test_render_item_with_password() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings::default();
        let binder = TemplateBinder::new(&engine, &settings);
        let item = Item {
            password: Some("abc".to_string()),
            ..tool()
        };

        for mode in Mode::all() {
            let settings = ListingSettings {
                mode,
                ..settings.clone()
            };
            let binder = TemplateBinder::new(&engine, &settings);
            assert!(binder.render_item(&item).unwrap().contains(r#"password "abc""#));
        }
        assert!(binder.render_card(&item).unwrap().contains(r#"password "abc""#));
    }

    #[test]
    fn test_render_item_includes_type_icon() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings::default();
        let binder = TemplateBinder::new(&engine, &settings);

        let html = binder.render_item(&tool()).unwrap();
        assert!(html.contains(&settings.type_icons["git"]));
    }

    const STYLED_PANEL_ITEM: &str = r#"
            <tr>
                {% if type_icon %}
                <td class="text-center {{item_css}}">
                    <a class="icon" href="{{url}}">
                    {{type_icon}}
                    </a>
                    {% if size %}<span class="clearfix small text-muted">{{size}}</span>{% endif %}
                </td>
                {% endif %}
                <td class="{{item_css}}">
                    {% if title %}
                        <h5>{{title}}</h5>
                    {% endif %}
                    {% if version or package_type%}
                    <span class="text-muted">version {{version}}</span>
                    {% endif %}
                </td>
            </tr>
        "#;

    const STYLED_LIST_ITEM: &str = r#"
            <a class="list-group-item {{item_color}}" href="{{url}}" target="_blank">
                <h4 class="list-group-item-heading {{item_css}}">{{title}}</h4>
            </a>
        "#;

    #[test]
    fn test_render_item_with_styling_hooks() {
        let engine = TeraTemplateEngine::new();
        let mut settings = ListingSettings::default();
        settings
            .item_templates
            .insert(Mode::Panel, STYLED_PANEL_ITEM.to_string());
        settings
            .item_templates
            .insert(Mode::List, STYLED_LIST_ITEM.to_string());

        let binder = TemplateBinder::new(&engine, &settings);
        let html = binder.render_item(&tool()).unwrap();
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains(r#"<td class="">"#));
        assert!(html.contains("<h5>Tool</h5>"));
        assert!(html.contains("version 1.0"));

        let settings = ListingSettings {
            mode: Mode::List,
            ..settings
        };
        let binder = TemplateBinder::new(&engine, &settings);
        let html = binder.render_listing(&[tool()]).unwrap();
        assert!(html.contains(r#"<a class="list-group-item " href="http://x/y""#));
        assert!(html.contains("Tool"));
    }

    #[test]
    fn test_render_listing_uses_mode_templates() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings {
            mode: Mode::List,
            ..Default::default()
        };
        let binder = TemplateBinder::new(&engine, &settings);

        let html = binder.render_listing(&[tool()]).unwrap();
        assert!(html.contains("list-group brepository-container"));
        assert!(html.contains("list-group-item"));
        assert!(!html.contains("panel-heading"));
    }

    #[test]
    fn test_render_listing_binds_header_and_panel_color() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings {
            header: "Downloads".to_string(),
            panel_color: "panel-success".to_string(),
            ..Default::default()
        };
        let binder = TemplateBinder::new(&engine, &settings);

        let html = binder.render_listing(&[tool(), Item::named("bare")]).unwrap();
        assert!(html.contains("panel panel-success"));
        assert!(html.contains(r#"<h3 class="panel-title">Downloads</h3>"#));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_render_listing_empty_header_hides_heading() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings {
            header: String::new(),
            ..Default::default()
        };
        let binder = TemplateBinder::new(&engine, &settings);

        let html = binder.render_listing(&[]).unwrap();
        assert!(!html.contains("panel-heading"));
        assert!(html.contains("brepository-container"));
    }

    #[test]
    fn test_render_listing_unknown_mode_is_lookup_failure() {
        let engine = TeraTemplateEngine::new();
        let mut settings = ListingSettings {
            mode: Mode::List,
            ..Default::default()
        };
        settings.templates.remove(&Mode::List);
        let binder = TemplateBinder::new(&engine, &settings);

        assert!(matches!(
            binder.render_listing(&[tool()]),
            Err(RenderError::UnknownMode(Mode::List))
        ));
    }

    #[test]
    fn test_render_item_unknown_mode_is_lookup_failure() {
        let engine = TeraTemplateEngine::new();
        let mut settings = ListingSettings::default();
        settings.item_templates.clear();
        let binder = TemplateBinder::new(&engine, &settings);

        assert!(matches!(
            binder.render_item(&tool()),
            Err(RenderError::UnknownMode(Mode::Panel))
        ));
    }

    #[test]
    fn test_render_card_with_doi() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings::default();
        let binder = TemplateBinder::new(&engine, &settings);
        let item = Item {
            doi: Some("https://doi.org/10.1/abc".to_string()),
            doi_img: Some(r#"<img src="badge.svg">"#.to_string()),
            ..tool()
        };

        let html = binder.render_card(&item).unwrap();
        assert!(html.contains(r#"<a href="https://doi.org/10.1/abc">"#));
        assert!(html.contains(r#"<img src="badge.svg">"#));
    }

    #[test]
    fn test_prepare_template_decodes_entities_and_trims() {
        assert_eq!(
            prepare_template("\n\t&lt;b&gt;{{ title }}&lt;/b&gt;\r\n"),
            "<b>{{ title }}</b>"
        );
    }

    #[test]
    fn test_render_card_with_escaped_template() {
        let engine = TeraTemplateEngine::new();
        let settings = ListingSettings {
            item_card: "&lt;div class=\"card\"&gt;{{ title }}&lt;/div&gt;".to_string(),
            ..Default::default()
        };
        let binder = TemplateBinder::new(&engine, &settings);

        assert_eq!(
            binder.render_card(&tool()).unwrap(),
            r#"<div class="card">Tool</div>"#
        );
    }
}
