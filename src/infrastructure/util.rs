use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// `slug` crate backed generator: transliterates to ASCII via deunicode and
/// joins words with hyphens.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
