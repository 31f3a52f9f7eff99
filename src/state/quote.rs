//! Quote request record and its field keys

use serde::{Serialize, Serializer};

/// Keys of the quote request, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuoteField {
    Name,
    Phone,
    Email,
    CityState,
    Brand,
    Model,
    Year,
    Plate,
    EngineSize,
    Transmission,
    Usage,
}

impl QuoteField {
    pub const ALL: [QuoteField; 11] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::CityState,
        Self::Brand,
        Self::Model,
        Self::Year,
        Self::Plate,
        Self::EngineSize,
        Self::Transmission,
        Self::Usage,
    ];

    /// Field at a display index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of the field in display order
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key sent to the webhook
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Phone => "telefone",
            Self::Email => "email",
            Self::CityState => "cidade",
            Self::Brand => "marca",
            Self::Model => "modelo",
            Self::Year => "ano",
            Self::Plate => "placa",
            Self::EngineSize => "motorizacao",
            Self::Transmission => "cambio",
            Self::Usage => "uso",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome Completo *",
            Self::Phone => "Telefone *",
            Self::Email => "Email *",
            Self::CityState => "Cidade e Estado *",
            Self::Brand => "Marca *",
            Self::Model => "Modelo *",
            Self::Year => "Ano de Fabricação *",
            Self::Plate => "Placa do Veículo *",
            Self::EngineSize => "Motorização *",
            Self::Transmission => "Câmbio *",
            Self::Usage => "Tipo de Uso *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "João Silva",
            Self::Phone => "(13) 97827-6520",
            Self::Email => "seu.email@exemplo.com",
            Self::CityState => "São Paulo, SP",
            Self::Brand => "Toyota",
            Self::Model => "Corolla",
            Self::Year => "2025",
            Self::Plate => "ABC1D23",
            Self::EngineSize => "1.6",
            Self::Transmission | Self::Usage => "Selecione uma opção",
        }
    }

    /// Closed-option selectors instead of free text
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Transmission | Self::Usage)
    }

    /// True for fields shown under the personal information section
    pub fn is_personal(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Phone | Self::Email | Self::CityState
        )
    }
}

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transmission {
    #[serde(rename = "Manual")]
    Manual,
    #[serde(rename = "Automático")]
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Self::Manual, Self::Automatic];

    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automático",
        }
    }
}

/// How the vehicle is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UsageType {
    #[serde(rename = "Passeio")]
    Personal,
    #[serde(rename = "Trabalho")]
    Work,
}

impl UsageType {
    pub const ALL: [UsageType; 2] = [Self::Personal, Self::Work];

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Passeio",
            Self::Work => "Trabalho",
        }
    }
}

/// The record submitted to the webhook.
///
/// Serializes to a flat JSON object keyed by [`QuoteField::wire_name`].
/// Selectors without a choice are sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: String,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "cidade")]
    pub city_state: String,
    #[serde(rename = "motorizacao")]
    pub engine_size: String,
    #[serde(rename = "cambio", serialize_with = "serialize_choice")]
    pub transmission: Option<Transmission>,
    #[serde(rename = "uso", serialize_with = "serialize_choice")]
    pub usage: Option<UsageType>,
}

fn serialize_choice<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

impl QuoteRequest {
    /// Text value of a free-text field (`None` for selectors)
    pub fn text(&self, field: QuoteField) -> Option<&str> {
        let value = match field {
            QuoteField::Name => &self.name,
            QuoteField::Phone => &self.phone,
            QuoteField::Email => &self.email,
            QuoteField::CityState => &self.city_state,
            QuoteField::Brand => &self.brand,
            QuoteField::Model => &self.model,
            QuoteField::Year => &self.year,
            QuoteField::Plate => &self.plate,
            QuoteField::EngineSize => &self.engine_size,
            QuoteField::Transmission | QuoteField::Usage => return None,
        };
        Some(value.as_str())
    }

    pub fn text_mut(&mut self, field: QuoteField) -> Option<&mut String> {
        let value = match field {
            QuoteField::Name => &mut self.name,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Email => &mut self.email,
            QuoteField::CityState => &mut self.city_state,
            QuoteField::Brand => &mut self.brand,
            QuoteField::Model => &mut self.model,
            QuoteField::Year => &mut self.year,
            QuoteField::Plate => &mut self.plate,
            QuoteField::EngineSize => &mut self.engine_size,
            QuoteField::Transmission | QuoteField::Usage => return None,
        };
        Some(value)
    }

    /// Value as shown in the form, empty when nothing was entered
    pub fn display_value(&self, field: QuoteField) -> String {
        match field {
            QuoteField::Transmission => self
                .transmission
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            QuoteField::Usage => self.usage.map(|u| u.label().to_string()).unwrap_or_default(),
            QuoteField::Plate => self.plate.to_uppercase(),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }

    /// Blank text (after trimming) or a selector without a choice
    pub fn is_blank(&self, field: QuoteField) -> bool {
        match field {
            QuoteField::Transmission => self.transmission.is_none(),
            QuoteField::Usage => self.usage.is_none(),
            other => self.text(other).map_or(true, |v| v.trim().is_empty()),
        }
    }

    /// Step a selector through `none -> first -> ... -> last -> none`.
    /// Text fields are left untouched.
    pub fn cycle_choice(&mut self, field: QuoteField, forward: bool) {
        match field {
            QuoteField::Transmission => {
                self.transmission = step(self.transmission, &Transmission::ALL, forward);
            }
            QuoteField::Usage => {
                self.usage = step(self.usage, &UsageType::ALL, forward);
            }
            _ => {}
        }
    }
}

fn step<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    // Slot 0 is "no selection", option i sits in slot i + 1
    let slots = options.len() + 1;
    let slot = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| options[i])
}
