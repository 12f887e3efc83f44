use once_cell::sync::Lazy;
use url::Url;

/// Brazilian country calling code, prepended when the user typed a national
/// number.
pub const COUNTRY_CODE: &str = "55";

// The public redirect endpoint, not the paid Business API. It has the best
// deep-link compatibility on phones, where wa.me sometimes lands on a
// browser interstitial instead of the app.
static SEND_ENDPOINT: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api.whatsapp.com/send").expect("send endpoint is a valid URL")
});

/// Turns a national digit string into the international one WhatsApp expects.
/// The check is a plain prefix test, matching what the form has always done:
/// a number that already starts with 55 is taken as international.
pub fn international(digits: &str) -> String {
    if digits.starts_with(COUNTRY_CODE) {
        digits.to_owned()
    } else {
        format!("{COUNTRY_CODE}{digits}")
    }
}

/// Builds the `api.whatsapp.com/send` deep link for a digit-only phone string
/// and an already-trimmed message. Query encoding is left to the URL
/// serializer.
pub fn send_url(digits: &str, message: &str) -> Url {
    let mut url = SEND_ENDPOINT.clone();
    url.query_pairs_mut()
        .append_pair("phone", &international(digits))
        .append_pair("text", message);
    url
}
