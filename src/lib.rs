// Library root
// -----------
// This crate exposes a small library surface for the CLI binary.
//
// Module responsibilities:
// - `api`: the HTTP exchange with the shortening service (request
//   payload, status classification, body decoding).
// - `app`: the CLI surface (flags, input validation, printing).
pub mod api;
pub mod app;
