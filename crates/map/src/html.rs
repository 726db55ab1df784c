//! Leaflet HTML document template

use crate::layer::{escape_html, MapLayer};
use std::fmt::Write;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const FULLSCREEN_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet.fullscreen/3.0.2/Control.FullScreen.min.css";
const FULLSCREEN_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet.fullscreen/3.0.2/Control.FullScreen.min.js";
const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const SCRIPT: &str = r#"
var map = L.map('map', { fullscreenControl: true }).setView(CENTER, ZOOM);
var osm = L.tileLayer(TILES, { maxZoom: 19, attribution: ATTRIBUTION }).addTo(map);
var areas = L.featureGroup().addTo(map);
LAYERS.forEach(function (layer) {
  var options = {
    color: layer.style.color,
    fill: true,
    opacity: layer.style.opacity,
    fillOpacity: layer.style.fillOpacity
  };
  var shape = layer.shape === 'circle'
    ? L.circle(layer.center, Object.assign({ radius: layer.radius }, options))
    : L.polygon(layer.locations, options);
  shape.bindPopup(layer.popup).addTo(areas);
});
L.control.layers({ 'OpenStreetMap': osm }, { 'Geofences': areas }).addTo(map);
"#;

/// Serialize for inline `<script>` use: no `</` sequence may close the tag early.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

pub(crate) fn document(title: &str, center: (f64, f64), zoom: u8, layers: &[MapLayer]) -> String {
    let mut out = String::with_capacity(4096 + layers.len() * 256);
    let title = escape_html(title);

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}">
<link rel="stylesheet" href="{FULLSCREEN_CSS}">
<style>html, body, #map {{ height: 100%; width: 100%; margin: 0; padding: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script src="{LEAFLET_JS}"></script>
<script src="{FULLSCREEN_JS}"></script>
<script>
var CENTER = [{lat}, {lng}];
var ZOOM = {zoom};
var TILES = {tiles};
var ATTRIBUTION = {attribution};
var LAYERS = {layers};
"#,
        lat = center.0,
        lng = center.1,
        tiles = script_json(OSM_TILES),
        attribution = script_json(OSM_ATTRIBUTION),
        layers = script_json(layers),
    );
    out.push_str(SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}
