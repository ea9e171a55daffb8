//! Random U.S./Canadian Address Generator
//!
//! This library serves a page with a plausible residential address in a
//! chosen (or random) U.S. state or Canadian province/territory, found by
//! reverse geocoding random points near known populated anchors, together
//! with a random persona and a matching phone number.
//!
//! # Modules
//!
//! - `address`: Sampling loop and acceptance policy for geocoded addresses.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Domain and wire data models.
//! - `page`: HTML rendering.
//! - `persona`: Random persona with local fallback.
//! - `phone`: Phone number synthesis.
//! - `regions`: Static region, anchor and area code tables.
//! - `services`: External service clients (reverse geocoder, person API).

pub mod address;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod persona;
pub mod phone;
pub mod regions;
pub mod services;
