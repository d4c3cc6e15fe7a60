use maud::{Markup, html};

use crate::{GENERATOR, route::RenderResult};

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

impl From<maud::Markup> for RenderResult {
    fn from(val: maud::Markup) -> Self {
        RenderResult::Text(val.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_tag() {
        assert_eq!(
            generator().into_string(),
            format!("<meta name=\"generator\" content=\"{}\">", GENERATOR)
        );
    }

    #[test]
    fn test_markup_into_render_result() {
        let result: RenderResult = html! { p { "Service not found." } }.into();

        assert!(matches!(result, RenderResult::Text(text) if text == "<p>Service not found.</p>"));
    }
}
