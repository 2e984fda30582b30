//! Built-in markup used when the site configuration does not override it.
//!
//! Templates are Tera sources evaluated without autoescaping, so icon markup
//! and pre-rendered rows pass through verbatim.

/// Container template wrapping the rendered rows in a bootstrap panel
pub const PANEL_CONTAINER_TEMPLATE: &str = r#"
<div class="panel {{ panel_color }}">
  {% if header %}
  <div class="panel-heading">
    <h3 class="panel-title">{{ header }}</h3>
  </div>
  {% endif %}
  <table class="table brepository-container">
  {{ list }}
  </table>
</div>
"#;

/// Container template wrapping the rendered rows in a list group
pub const LIST_CONTAINER_TEMPLATE: &str = r#"
{% if header %}
<h3 class="section-heading text-center">{{ header }}</h3>
{% endif %}
<div class="list-group brepository-container">
  {{ list }}
</div>
"#;

/// Table row rendered for each item in panel mode
pub const PANEL_ITEM_TEMPLATE: &str = r#"
<tr>
  {% if type_icon %}
  <td class="text-center">
    <a class="icon" href="{{ url }}">
    {{ type_icon }}
    </a>
    {% if size %}<span class="clearfix small text-muted">{{ size }}</span>{% endif %}
  </td>
  {% endif %}
  <td>
    <div class="row">
      <div class="col-md-12">
        {% if url %}<a href="{{ url }}" target="_blank">{% endif %}
        {% if title %}<h5>{{ title }}</h5>{% endif %}
        {% if url %}</a>{% endif %}
      </div>
      <div class="col-md-12">
        {% if version or package_type %}
        <span class="text-muted">
          {% if version %}version {{ version }}{% endif %}
          {% if package_type %}(.{{ package_type }}){% endif %}
        </span>
        {% endif %}
        {% if password %}
        <br>
        <strong>password "{{ password }}"</strong>
        {% endif %}
      </div>
    </div>
  </td>
</tr>
"#;

/// List group entry rendered for each item in list mode
pub const LIST_ITEM_TEMPLATE: &str = r#"
<a class="list-group-item" href="{{ url }}" target="_blank">
  <div class="row">
    {% if type_icon %}
    <div class="col-md-1 col-sm-2">
      {{ type_icon }}
    </div>
    {% endif %}
    <div class="col-md-11 col-sm-10">
      {% if title %}
      <h4 class="list-group-item-heading">{{ title }} <i class="fa fa-download"></i></h4>
      {% endif %}
      {% if size %}
      <span class="text-muted">({{ size }})</span>
      <br>
      {% endif %}
      {% if version or package_type or password %}
      <span class="text-muted">
        {% if version %}version {{ version }}{% endif %}
        {% if package_type %}(.{{ package_type }}){% endif %}
      </span>
      {% endif %}
      {% if password %}
      <br>
      <strong>password "{{ password }}"</strong>
      {% endif %}
    </div>
  </div>
</a>
"#;

/// Standalone card rendered for single-item markers
pub const ITEM_CARD_TEMPLATE: &str = r#"
<div class="row">
  {% if type_icon %}
  <div class="col-md-1">
    <a class="icon" href="{{ url }}" target="_blank">
    {{ type_icon }}
    </a>
  </div>
  {% endif %}
  <div class="col-md-11">
    {% if url %}<a href="{{ url }}" target="_blank">{% endif %}
    {% if title %}<span style="font-size:20px;">{{ title }} <i class="fa fa-download"></i></span>{% endif %}
    {% if url %}</a>{% endif %}
    {% if size %}<span class="text-muted">({{ size }})</span>{% endif %}
    <br>
    {% if DOI %}<a href="{{ DOI }}">{% endif %}
    {% if DOI_img %}{{ DOI_img }}{% endif %}
    {% if DOI %}</a>{% endif %}
    {% if version or package_type or password %}
    <span class="text-muted">
      {% if version %}version {{ version }}{% endif %}
      {% if package_type %}(.{{ package_type }}){% endif %}
    </span>
    {% endif %}
    {% if password %}
    <br>
    <strong>password "{{ password }}"</strong>
    {% endif %}
  </div>
</div>
"#;

/// Default accent class applied to panel containers
pub const DEFAULT_PANEL_COLOR: &str = "panel-info";

/// Default listing title
pub const DEFAULT_HEADER: &str = "Repository";

fn stacked_icon(color: &str, glyph: &str) -> String {
    format!(
        r#"<span class="fa-stack fa-2x"><i class="fa fa-square fa-stack-2x {color}"></i><i class="fa {glyph} fa-stack-1x fa-inverse"></i></span>"#
    )
}

/// Built-in type tag to icon markup table
pub fn default_type_icons() -> Vec<(&'static str, String)> {
    vec![
        ("audio", stacked_icon("text-success", "fa-file-audio-o")),
        ("git", stacked_icon("", "fa-github")),
        ("python", stacked_icon("text-success", "icon-python")),
        ("jquery", stacked_icon("text-info", "icon-jquery")),
        ("php", stacked_icon("text-warning", "icon-php")),
        ("javascript", stacked_icon("text-info", "icon-javascript")),
        ("c", stacked_icon("text-danger", "icon-c")),
        ("cplusplus", stacked_icon("text-danger", "icon-cplusplus")),
        ("html5", stacked_icon("text-warning", "icon-html5")),
        ("python-package", stacked_icon("text-warning", "fa-gears")),
        ("matlab-package", stacked_icon("text-info", "fa-gears")),
        ("latex", stacked_icon("text-muted", "fa-file-text-o")),
        ("word", stacked_icon("text-muted", "fa-file-word-o")),
        ("doc", stacked_icon("text-muted", "fa-file-text-o")),
        ("theme", stacked_icon("text-warning", "fa-file-image-o")),
    ]
}
