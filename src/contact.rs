//! Outbound contact-link construction.
//!
//! Each product card carries a "Buy Now" link that deep-links into WhatsApp
//! with a pre-filled message naming the product and its absolute image URL,
//! so the conversation opens with enough context for the store owner (and
//! WhatsApp can render a preview of a publicly-reachable image).
//!
//! Link construction is a total function: a missing or digit-free phone
//! number degrades to the inert placeholder `"#"` instead of failing the
//! build. The caller decides how the link is opened; nothing here navigates.

/// Build a `wa.me` deep link for one product.
///
/// The phone number is reduced to its digits; the message text is
/// URL-encoded. Returns `"#"` when no digits remain.
///
/// ```
/// let link = shopfront::contact::build_contact_link(
///     "+234 801 234",
///     "https://example.com/hat.jpg",
///     "Hat",
/// );
/// assert!(link.starts_with("https://wa.me/234801234?text="));
/// assert_eq!(shopfront::contact::build_contact_link("", "u", "l"), "#");
/// ```
pub fn build_contact_link(phone: &str, product_url: &str, label: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return "#".to_string();
    }
    let message = format!("Hi, I'm interested in this product: {label}. {product_url}");
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(&message))
}
