//! Brand copy and asset paths shared by the page, the head metadata and the
//! theme sampler.

pub const BRAND_NAME: &str = "Vorrenti";

pub const PAGE_TITLE: &str = "Vorrenti | Luxury Mattress – Coming Soon";
pub const META_DESCRIPTION: &str = "Vorrenti luxury mattress – Sign up to get launch updates.";
pub const OG_DESCRIPTION: &str = "Sign up to get notified when Vorrenti launches.";
pub const HEADING: &str = "Vorrenti Luxury Mattress – Coming Soon";

pub const LOGO_SRC: &str = "/assets/vorrenti-logo.png";
pub const LOGO_ALT: &str = "Vorrenti logo – luxury mattress brand";
pub const HERO_SRC: &str = "/assets/vorrenti-hero.png";
pub const HERO_ALT: &str = "Vorrenti luxury mattress in an elegant bedroom";

pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const NO_SPAM_NOTE: &str = "No spam. Unsubscribe anytime.";
