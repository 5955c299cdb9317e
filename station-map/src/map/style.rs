//! Map style rules.
//!
//! Rules serialize to the `MapTypeStyle` JSON shape the mapping script
//! accepts in its `styles` option.

use serde::Serialize;

/// A single style property applied by a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Styler {
    /// Hex colour such as `#FF0000`.
    Color(String),
    /// Line weight in pixels.
    Weight(u32),
    Visibility(Visibility),
}

/// Visibility override; the theme only ever hides features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Off,
}

/// A style rule: which features and elements it targets, and how.
///
/// A missing feature or element type matches everything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    pub stylers: Vec<Styler>,
}

impl StyleRule {
    /// A rule applying to every feature's `element_type`.
    pub fn element(element_type: &str) -> Self {
        Self {
            feature_type: None,
            element_type: Some(element_type.to_string()),
            stylers: Vec::new(),
        }
    }

    /// A rule applying to `element_type` of `feature_type` features.
    pub fn feature(feature_type: &str, element_type: &str) -> Self {
        Self {
            feature_type: Some(feature_type.to_string()),
            ..Self::element(element_type)
        }
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.stylers.push(Styler::Color(hex.to_string()));
        self
    }

    pub fn weight(mut self, px: u32) -> Self {
        self.stylers.push(Styler::Weight(px));
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.stylers.push(Styler::Visibility(visibility));
        self
    }
}

const RED: &str = "#FF0000";
const BLACK: &str = "#000000";
const WHITE: &str = "#FFFFFF";
const TRANSIT_YELLOW: &str = "#ebd534";

/// The bundled red, black and white "phantom" theme.
///
/// Land is bright red, roads and water are black, and labels are white
/// with a heavy black outline. POI icons are hidden and transit lines are
/// picked out in yellow.
pub fn phantom_style() -> Vec<StyleRule> {
    vec![
        StyleRule::element("geometry").color(RED),
        StyleRule::element("labels.text.fill").color(WHITE),
        StyleRule::element("labels.text.stroke").color(BLACK).weight(4),
        StyleRule::feature("poi", "labels.icon").visibility(Visibility::Off),
        StyleRule::feature("road", "geometry").color(BLACK),
        StyleRule::feature("road", "geometry.stroke").color(WHITE).weight(1),
        StyleRule::feature("road.highway", "geometry.fill").color(BLACK),
        StyleRule::feature("road.highway", "geometry.stroke").color(WHITE).weight(2),
        StyleRule::feature("road", "labels.text.fill").color(WHITE),
        StyleRule::feature("landscape.natural", "geometry.fill").color(RED),
        StyleRule::feature("poi", "geometry.fill").color(RED),
        StyleRule::feature("water", "geometry").color(BLACK),
        StyleRule::feature("water", "labels.text.fill").color(WHITE),
        StyleRule::feature("transit.line", "geometry").color(TRANSIT_YELLOW),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn phantom_has_every_rule() {
        let style = phantom_style();
        assert_eq!(style.len(), 14);
        assert_eq!(
            style.last().unwrap().feature_type.as_deref(),
            Some("transit.line")
        );
    }

    #[test]
    fn element_rule_omits_feature_type() {
        let rule = StyleRule::element("geometry").color("#FF0000");
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"elementType": "geometry", "stylers": [{"color": "#FF0000"}]})
        );
    }

    #[test]
    fn feature_rule_serializes_camel_case() {
        let rule = StyleRule::feature("road.highway", "geometry.stroke")
            .color("#FFFFFF")
            .weight(2);
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "featureType": "road.highway",
                "elementType": "geometry.stroke",
                "stylers": [{"color": "#FFFFFF"}, {"weight": 2}]
            })
        );
    }

    #[test]
    fn visibility_serializes_lowercase() {
        let rule = StyleRule::feature("poi", "labels.icon").visibility(Visibility::Off);
        assert_eq!(
            serde_json::to_value(&rule).unwrap()["stylers"],
            json!([{"visibility": "off"}])
        );
    }

    #[test]
    fn label_stroke_is_heavy() {
        let style = phantom_style();
        let stroke = style
            .iter()
            .find(|r| r.feature_type.is_none() && r.element_type.as_deref() == Some("labels.text.stroke"))
            .unwrap();
        assert_eq!(
            stroke.stylers,
            vec![Styler::Color(BLACK.to_string()), Styler::Weight(4)]
        );
    }
}
