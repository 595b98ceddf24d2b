//! Line renderer.

use super::standard::StandardLinkBuilder;
use crate::core::{HitCoordinates, HitDescriptor, LinkResult};
use crate::resolver::LinkResolver;

/// Renders an anchor that opens in a new browsing context.
#[must_use]
pub fn anchor(href: &str, text: &str) -> String {
    format!("<a href='{href}' target='_blank'>{text}</a>")
}

/// Renders the markup line for each hit.
///
/// A line with a custom link carries two anchors: the custom link labelled
/// with the identifier, then the standard link labelled `Download <id>`.
/// Without a custom link the identifier points at the standard link alone.
/// Every line starts with `>` and ends with ` \n`.
#[derive(Debug, Clone, Default)]
pub struct LineRenderer {
    resolver: LinkResolver,
}

impl LineRenderer {
    /// Creates a renderer around a resolver.
    #[must_use]
    pub const fn new(resolver: LinkResolver) -> Self {
        Self { resolver }
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &LinkResolver {
        &self.resolver
    }

    /// Renders the line for one hit.
    ///
    /// The standard link is computed even when a custom link exists, since
    /// both appear on the line.
    pub fn render<S>(&self, identifier: &str, coordinates: HitCoordinates, standard: &S) -> String
    where
        S: StandardLinkBuilder + ?Sized,
    {
        let custom = self.resolver.resolve(identifier, coordinates);
        let standard = standard.standard_link(identifier, coordinates);

        match custom {
            LinkResult::NoLink => format!(">{} \n", anchor(&standard, identifier)),
            LinkResult::Url { url } => format!(
                ">{}&nbsp;{} \n",
                anchor(&url, identifier),
                anchor(&standard, &format!("Download {identifier}"))
            ),
        }
    }

    /// Renders the line for a hit descriptor.
    pub fn render_hit<S>(&self, hit: &HitDescriptor, standard: &S) -> String
    where
        S: StandardLinkBuilder + ?Sized,
    {
        self.render(&hit.sequence_id, hit.hit_coordinates, standard)
    }

    /// Renders one line per hit, in input order.
    pub fn render_all<'a, I, S>(&self, hits: I, standard: &S) -> String
    where
        I: IntoIterator<Item = &'a HitDescriptor>,
        S: StandardLinkBuilder + ?Sized,
    {
        hits.into_iter().fold(String::new(), |mut out, hit| {
            out.push_str(&self.render_hit(hit, standard));
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_anchor() {
        assert_eq!(
            anchor("http://a/", "seq1"),
            "<a href='http://a/' target='_blank'>seq1</a>"
        );
    }

    #[test]
    fn test_render_without_custom_link() {
        let renderer = LineRenderer::default();
        let standard = |id: &str, _: HitCoordinates| format!("/seq/{id}");

        assert_eq!(
            renderer.render("unparsable", HitCoordinates::new(1, 2), &standard),
            "><a href='/seq/unparsable' target='_blank'>unparsable</a> \n"
        );
    }

    #[test]
    fn test_render_with_custom_link() {
        let renderer = LineRenderer::default();
        let standard = |_: &str, _: HitCoordinates| "/seq/x".to_string();

        assert_eq!(
            renderer.render("lcl|scaffold_9 ", HitCoordinates::new(10, 20), &standard),
            "><a href='http://asparagus.uga.edu/jbrowse/?loc=scaffold_9:1..5020' target='_blank'>lcl|scaffold_9 </a>\
             &nbsp;<a href='/seq/x' target='_blank'>Download lcl|scaffold_9 </a> \n"
        );
    }
}
