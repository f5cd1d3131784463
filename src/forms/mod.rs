/// Typed descriptor for a text form field.
///
/// Replaces runtime prop-shape checking with a struct: the accepted inputs
/// are the fields, and misuse fails at compile time. `render` emits the
/// Bootstrap markup the original client shipped.
#[derive(Debug, Clone)]
pub struct TextField {
    pub name: String,
    pub value: String,
    pub input_type: String,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub disabled: bool,
}

impl TextField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input_type: "text".to_string(),
            placeholder: None,
            error: None,
            info: None,
            disabled: false,
        }
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render the field as an HTML string.
    ///
    /// All user-supplied values are escaped. The Gravatar hint renders only
    /// under a field literally named `email`, as in the original form.
    pub fn render(&self) -> String {
        let mut class = String::from("form-control form-control-lg");
        if self.error.is_some() {
            class.push_str(" is-invalid");
        }

        let mut html = String::from("<div class=\"form-group\">");

        html.push_str(&format!(
            "<input type=\"{}\" class=\"{}\" name=\"{}\" value=\"{}\"",
            escape_html(&self.input_type),
            class,
            escape_html(&self.name),
            escape_html(&self.value),
        ));
        if let Some(placeholder) = &self.placeholder {
            html.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
        }
        if self.disabled {
            html.push_str(" disabled");
        }
        html.push('>');

        if let Some(info) = &self.info {
            html.push_str(&format!(
                "<small class=\"form-text text-muted\">{}</small>",
                escape_html(info)
            ));
        }

        if self.name == "email" {
            html.push_str(
                "<small class=\"form-text text-muted\">This site uses Gravatar \
                 so if you want a profile image, use a Gravatar email</small>",
            );
        }

        if let Some(error) = &self.error {
            html.push_str(&format!(
                "<div class=\"invalid-feedback\">{}</div>",
                escape_html(error)
            ));
        }

        html.push_str("</div>");
        html
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
