//! Conversion from directions wire types to domain routes.

use crate::domain::{Route, RouteAlternative, RouteStep, TravelMode};
use crate::polyline;

use super::error::DirectionsError;
use super::types::{DirectionsResponse, RouteDto};

/// Convert a directions response into a domain route.
///
/// The first route is the recommended one; the rest become alternatives.
/// A response with no usable route (non-OK status, empty route list, or a
/// route without legs) maps to `DirectionsError::NoRoute`.
pub fn convert_directions(
    response: &DirectionsResponse,
    mode: TravelMode,
) -> Result<Route, DirectionsError> {
    if let Some(status) = &response.status {
        if status != "OK" {
            return Err(DirectionsError::NoRoute);
        }
    }

    let first = response.routes.first().ok_or(DirectionsError::NoRoute)?;
    let leg = first.legs.first().ok_or(DirectionsError::NoRoute)?;

    let steps = leg
        .steps
        .iter()
        .map(|step| RouteStep {
            instruction: strip_html_tags(&step.html_instructions),
            distance_text: step.distance.text.clone(),
            duration_text: step.duration.text.clone(),
        })
        .collect();

    let alternatives = response
        .routes
        .iter()
        .skip(1)
        .filter_map(convert_alternative)
        .collect();

    Ok(Route {
        mode,
        distance_text: leg.distance.text.clone(),
        duration_text: leg.duration.text.clone(),
        points: polyline::decode(&first.overview_polyline.points),
        steps,
        alternatives,
    })
}

/// Convert a non-recommended route to an alternative summary.
/// Routes without a leg carry no totals and are skipped.
fn convert_alternative(route: &RouteDto) -> Option<RouteAlternative> {
    let leg = route.legs.first()?;

    Some(RouteAlternative {
        distance_text: leg.distance.text.clone(),
        duration_text: leg.duration.text.clone(),
        points: polyline::decode(&route.overview_polyline.points),
    })
}

/// Remove `<...>` tag spans from instruction markup.
///
/// Matches the app's display behaviour: tags are dropped wholesale, text
/// between them is kept verbatim. An unterminated tag swallows the rest of
/// the string.
pub fn strip_html_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}
