// Analyze API: multipart upload → text extraction → lexical comparison → static advice.
// Every request is analyzed on its own; nothing is kept between requests.

pub mod handlers;
pub mod pipeline;
pub mod upload;
