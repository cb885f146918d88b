use crate::domain::chart::{ChartPalette, KlineChart};
use crate::domain::market_data::{MaPeriod, PricePoint};
use crate::time_utils::format_price;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One coloured entry of the moving-average legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaLegendEntry {
    pub label: String,
    pub color: String,
}

/// Text overlay shown above the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub is_up: bool,
    /// Colour of the OHLC values: up colour for rising samples, down otherwise.
    pub value_color: String,
    pub moving_averages: Vec<MaLegendEntry>,
}

impl Legend {
    /// Legend for the hovered sample, else the newest one. `None` for an
    /// empty series.
    pub fn for_chart(chart: &KlineChart, palette: &ChartPalette) -> Option<Self> {
        chart.legend_point().map(|point| Self::for_point(point, palette))
    }

    pub fn for_point(point: &PricePoint, palette: &ChartPalette) -> Self {
        let is_up = point.is_up();
        let value_color = if is_up { palette.up } else { palette.down };
        Self {
            open: format_price(point.open()),
            high: format_price(point.high()),
            low: format_price(point.low()),
            close: format_price(point.close()),
            volume: format!("{:.0}", point.volume()),
            is_up,
            value_color: value_color.to_css(),
            moving_averages: ma_legend(palette),
        }
    }

    /// Single-line form: `O: 1.00 H: 2.00 L: 0.50 C: 1.50 Vol: 300`.
    pub fn line(&self) -> String {
        format!(
            "O: {} H: {} L: {} C: {} Vol: {}",
            self.open, self.high, self.low, self.close, self.volume
        )
    }
}

pub fn ma_legend(palette: &ChartPalette) -> Vec<MaLegendEntry> {
    MaPeriod::iter()
        .map(|kind| MaLegendEntry { label: kind.label(), color: palette.ma_color(kind).to_css() })
        .collect()
}
