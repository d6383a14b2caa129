//! Template-based marketing headline generation.
//!
//! DESIGN
//! ======
//! A fixed set of templates, each carrying one `{name}` and one `{location}`
//! token. Substitution is a single left-to-right pass over the template, so
//! a business name that happens to contain `{location}` is inserted as-is
//! and never re-substituted.

use rand::Rng;

#[cfg(test)]
#[path = "headline_test.rs"]
mod tests;

pub const NAME_TOKEN: &str = "{name}";
pub const LOCATION_TOKEN: &str = "{location}";

pub const HEADLINE_TEMPLATES: [&str; 5] = [
    "{name}: The Hidden Gem of {location} You Need to Visit!",
    "5 Reasons Why {name} is {location}'s Top Choice in 2025",
    "Discover the Unmatched Quality of {name} in {location}",
    "{location}'s Best Kept Secret: A Deep Dive into {name}",
    "How {name} is Revolutionizing the Local Scene in {location}",
];

/// Pick a template uniformly at random and fill it in.
///
/// Inputs are not validated; empty strings are substituted as empty.
pub fn generate_headline<R: Rng + ?Sized>(rng: &mut R, name: &str, location: &str) -> String {
    let idx = rng.random_range(0..HEADLINE_TEMPLATES.len());
    render_template(HEADLINE_TEMPLATES[idx], name, location)
}

/// Replace the first `{name}` and first `{location}` token of `template`.
#[must_use]
pub fn render_template(template: &str, name: &str, location: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + location.len());
    let mut rest = template;
    let mut name_done = false;
    let mut location_done = false;

    while let Some(pos) = rest.find('{') {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);

        if !name_done && tail.starts_with(NAME_TOKEN) {
            out.push_str(name);
            rest = &tail[NAME_TOKEN.len()..];
            name_done = true;
        } else if !location_done && tail.starts_with(LOCATION_TOKEN) {
            out.push_str(location);
            rest = &tail[LOCATION_TOKEN.len()..];
            location_done = true;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
