use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintResponse {
    pub rule: String,
    pub color: Color,
}
