use serde::Serialize;
use syzygy_optics::Evaluation;

/// Geometry and occlusion of one instant, shaped for a canvas renderer.
/// Lengths are canvas units relative to the primary disk centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryView {
    pub mode: &'static str,
    pub kind: &'static str,
    pub scale: f64,
    pub sun_radius: f64,
    pub moon_radius: f64,
    pub moon_x: f64,
    pub moon_y: f64,
    pub separation: f64,
    pub umbra_radius: Option<f64>,
    pub penumbra_radius: Option<f64>,
    pub flux: f64,
    pub umbra_fraction: f64,
    pub penumbra_fraction: f64,
}

impl From<&Evaluation> for GeometryView {
    fn from(eval: &Evaluation) -> Self {
        let g = &eval.geometry;
        Self {
            mode: g.mode.name(),
            kind: eval.kind.label(),
            scale: g.scale,
            sun_radius: g.sun_radius,
            moon_radius: g.moon_radius,
            moon_x: g.moon_offset.x,
            moon_y: g.moon_offset.y,
            separation: g.separation,
            umbra_radius: g.shadow.map(|s| s.umbra),
            penumbra_radius: g.shadow.map(|s| s.penumbra),
            flux: eval.occlusion.flux,
            umbra_fraction: eval.occlusion.umbra_fraction,
            penumbra_fraction: eval.occlusion.penumbra_fraction,
        }
    }
}

impl GeometryView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
