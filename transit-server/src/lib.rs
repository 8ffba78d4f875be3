//! Eco-mobility transit server.
//!
//! Backend for a mobility app centred on Korçë: ranks intercity
//! destinations by distance and synthesises their departure boards, serves
//! the local stop directory, plans routes via a remote directions API
//! (decoding their polylines for the map), and keeps the rider's rewards
//! balance.

pub mod cache;
pub mod directions;
pub mod domain;
pub mod intercity;
pub mod polyline;
pub mod rewards;
pub mod stops;
pub mod web;
