use std::sync::LazyLock;

use regex::Regex;

pub mod catalog;
pub mod config;
pub mod contact;
pub mod icons;
pub mod runtime;
pub mod state;

// string validation
//
// this mirrors what an <input type="email"> accepts closely enough that the browser and
// ContactForm::validate() agree on anything a person would actually type
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub(crate) static EMAIL_MATCHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

// placeholder target for links the catalog leaves out
pub const PLACEHOLDER_LINK: &str = "#";
