//! Venue locations and their map widgets
//!
//! Each venue gets a map container. When the map provider is usable every
//! container shows an interactive map description; otherwise every container
//! gets a static card with the venue title, address and start time.

use crate::error::MapUnavailable;
use chrono::NaiveTime;

/// A place guests need to find
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Name of the container the widget is rendered into
    pub container: String,
    pub title: String,
    pub address: String,
    pub city: Option<String>,
    pub starts_at: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Caption on the map placemark
    pub placemark: String,
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Ceremony and celebration venues
pub fn default_venues() -> Vec<Venue> {
    vec![
        Venue {
            container: "map-ceremony".to_string(),
            title: "Registry office, Angliyskaya nab. 28".to_string(),
            address: "Angliyskaya naberezhnaya 28".to_string(),
            city: Some("Saint Petersburg".to_string()),
            starts_at: at(14),
            latitude: 59.9343,
            longitude: 30.2989,
            zoom: 16,
            placemark: "Registry office on Angliyskaya naberezhnaya 28".to_string(),
        },
        Venue {
            container: "map-party".to_string(),
            title: "Celebration".to_string(),
            address: "Primorskoe shosse 452A".to_string(),
            city: None,
            starts_at: at(17),
            latitude: 60.1826,
            longitude: 29.7851,
            zoom: 15,
            placemark: "Celebration: Primorskoe shosse 452A".to_string(),
        },
    ]
}

/// A map the provider could produce for a venue
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveMap {
    pub container: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub placemark: String,
    /// Rendered map image
    pub image_url: String,
    /// Full map in the browser
    pub link_url: String,
}

/// Static content used when no map can be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCard {
    pub container: String,
    pub title: String,
    pub address: String,
    pub city: Option<String>,
    pub starts_at: NaiveTime,
}

impl From<&Venue> for FallbackCard {
    fn from(venue: &Venue) -> Self {
        Self {
            container: venue.container.clone(),
            title: venue.title.clone(),
            address: venue.address.clone(),
            city: venue.city.clone(),
            starts_at: venue.starts_at,
        }
    }
}

impl FallbackCard {
    /// Card text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), self.address.clone()];
        if let Some(city) = &self.city {
            lines.push(city.clone());
        }
        lines.push(format!("Starts at {}", self.starts_at.format("%H:%M")));
        lines
    }
}

/// What a venue container ends up showing
#[derive(Debug, Clone, PartialEq)]
pub enum VenueWidget {
    Interactive(InteractiveMap),
    Fallback(FallbackCard),
}

impl VenueWidget {
    pub fn container(&self) -> &str {
        match self {
            Self::Interactive(map) => &map.container,
            Self::Fallback(card) => &card.container,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Capability check and rendering for a map backend
#[cfg_attr(test, mockall::automock)]
pub trait MapProvider {
    /// Whether the provider can be used at all
    fn probe(&self) -> Result<(), MapUnavailable>;

    /// Produce the map for one venue
    fn embed(&self, venue: &Venue) -> Result<InteractiveMap, MapUnavailable>;
}

/// Static map images from the Yandex static API; needs an API key
pub struct StaticMapProvider {
    api_key: Option<String>,
}

impl StaticMapProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

impl MapProvider for StaticMapProvider {
    fn probe(&self) -> Result<(), MapUnavailable> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(MapUnavailable::NotConfigured),
        }
    }

    fn embed(&self, venue: &Venue) -> Result<InteractiveMap, MapUnavailable> {
        let api_key = self.api_key.as_deref().ok_or(MapUnavailable::NotConfigured)?;
        let in_range = (-90.0..=90.0).contains(&venue.latitude)
            && (-180.0..=180.0).contains(&venue.longitude);
        if !in_range {
            return Err(MapUnavailable::EmbedFailed {
                venue: venue.container.clone(),
                reason: format!(
                    "coordinates out of range: {},{}",
                    venue.latitude, venue.longitude
                ),
            });
        }
        let ll = format!("{},{}", venue.longitude, venue.latitude);
        Ok(InteractiveMap {
            container: venue.container.clone(),
            title: venue.title.clone(),
            latitude: venue.latitude,
            longitude: venue.longitude,
            zoom: venue.zoom,
            placemark: venue.placemark.clone(),
            image_url: format!(
                "https://static-maps.yandex.ru/v1?ll={ll}&z={}&pt={ll},pm2rdm&apikey={api_key}",
                venue.zoom
            ),
            link_url: format!("https://yandex.ru/maps/?ll={ll}&z={}&pt={ll}", venue.zoom),
        })
    }
}

/// Build one widget per venue. Any provider failure sends every venue to its fallback card.
pub fn init_venue_widgets(provider: &dyn MapProvider, venues: &[Venue]) -> Vec<VenueWidget> {
    let maps = provider.probe().and_then(|()| {
        venues
            .iter()
            .map(|venue| provider.embed(venue))
            .collect::<Result<Vec<_>, _>>()
    });

    match maps {
        Ok(maps) => {
            let widgets: Vec<_> = maps.into_iter().map(VenueWidget::Interactive).collect();
            for widget in &widgets {
                tracing::debug!(container = widget.container(), "Venue map embedded");
            }
            widgets
        }
        Err(err) => {
            tracing::warn!("Map provider unavailable, showing static venue cards: {err}");
            venues
                .iter()
                .map(|venue| VenueWidget::Fallback(FallbackCard::from(venue)))
                .collect()
        }
    }
}
