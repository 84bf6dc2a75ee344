//! Target bandwidth quality levels

/// Target bandwidth of the codec, in kbit/s
///
/// The pretrained 24 kHz model supports exactly these levels; each one
/// activates a fixed number of residual quantizer stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Bandwidth {
    #[serde(rename = "1.5")]
    Kbps1_5,
    #[serde(rename = "3")]
    Kbps3,
    #[serde(rename = "6")]
    Kbps6,
    #[serde(rename = "12")]
    Kbps12,
    #[serde(rename = "24")]
    Kbps24,
}

impl Bandwidth {
    /// Bandwidth in kbit/s
    pub fn as_kbps(self) -> f32 {
        match self {
            Self::Kbps1_5 => 1.5,
            Self::Kbps3 => 3.0,
            Self::Kbps6 => 6.0,
            Self::Kbps12 => 12.0,
            Self::Kbps24 => 24.0,
        }
    }

    /// Number of quantizer stages active at this bandwidth
    ///
    /// One stage carries 0.75 kbit/s at the 24 kHz model's 75 Hz frame
    /// rate.
    pub fn num_quantizers(self) -> usize {
        (self.as_kbps() / 0.75) as usize
    }

    /// Parse a configured level; only the fixed set is accepted
    pub fn from_kbps(kbps: f32) -> Option<Self> {
        match kbps {
            k if k == 1.5 => Some(Self::Kbps1_5),
            k if k == 3.0 => Some(Self::Kbps3),
            k if k == 6.0 => Some(Self::Kbps6),
            k if k == 12.0 => Some(Self::Kbps12),
            k if k == 24.0 => Some(Self::Kbps24),
            _ => None,
        }
    }
}

impl Default for Bandwidth {
    fn default() -> Self {
        Self::Kbps6
    }
}
