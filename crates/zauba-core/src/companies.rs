use serde::Serialize;

/// A listing-page link suspected to point at a company detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCandidate {
    /// Trimmed anchor text, e.g. `"Acme Private Limited"`.
    pub name: String,
    /// Absolute URL, resolved against the site base.
    pub url: String,
}

/// One column of the fixed [`CompanyRecord`] schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    CompanyName,
    RegistrationId,
    Status,
    DateOfIncorporation,
    Email,
    Phone,
    Address,
    RegistrarOffice,
    RegistrationNumber,
    PaidUpCapital,
}

impl Field {
    /// Every field, in output column order.
    pub const ALL: [Field; 11] = [
        Field::Url,
        Field::CompanyName,
        Field::RegistrationId,
        Field::Status,
        Field::DateOfIncorporation,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::RegistrarOffice,
        Field::RegistrationNumber,
        Field::PaidUpCapital,
    ];

    /// Column header used in CSV output.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Field::Url => "URL",
            Field::CompanyName => "CompanyName",
            Field::RegistrationId => "RegistrationID",
            Field::Status => "Status",
            Field::DateOfIncorporation => "DateOfIncorporation",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Address => "Address",
            Field::RegistrarOffice => "RegistrarOffice",
            Field::RegistrationNumber => "RegistrationNumber",
            Field::PaidUpCapital => "PaidUpCapital",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Structured details for one company, extracted from its detail page.
///
/// Every column is always present; a field whose extraction rule did not
/// match holds an empty string. Serialization order matches [`Field::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "CompanyName")]
    company_name: String,
    #[serde(rename = "RegistrationID")]
    registration_id: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "DateOfIncorporation")]
    date_of_incorporation: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "RegistrarOffice")]
    registrar_office: String,
    #[serde(rename = "RegistrationNumber")]
    registration_number: String,
    #[serde(rename = "PaidUpCapital")]
    paid_up_capital: String,
}

impl CompanyRecord {
    /// Builds a record from per-field extraction results.
    ///
    /// `None` becomes an empty string. Fields not mentioned stay empty; a
    /// field listed twice keeps the later value.
    #[must_use]
    pub fn assemble<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Field, Option<String>)>,
    {
        let mut record = Self::default();
        for (field, value) in values {
            *record.slot_mut(field) = value.unwrap_or_default();
        }
        record
    }

    /// Returns the value stored for `field` (empty when unmatched).
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::CompanyName => &self.company_name,
            Field::RegistrationId => &self.registration_id,
            Field::Status => &self.status,
            Field::DateOfIncorporation => &self.date_of_incorporation,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::RegistrarOffice => &self.registrar_office,
            Field::RegistrationNumber => &self.registration_number,
            Field::PaidUpCapital => &self.paid_up_capital,
        }
    }

    /// Returns `(field, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Number of fields other than `URL` that carry a value.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.iter()
            .filter(|(field, value)| *field != Field::Url && !value.is_empty())
            .count()
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Url => &mut self.url,
            Field::CompanyName => &mut self.company_name,
            Field::RegistrationId => &mut self.registration_id,
            Field::Status => &mut self.status,
            Field::DateOfIncorporation => &mut self.date_of_incorporation,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::RegistrarOffice => &mut self.registrar_office,
            Field::RegistrationNumber => &mut self.registration_number,
            Field::PaidUpCapital => &mut self.paid_up_capital,
        }
    }
}

#[cfg(test)]
#[path = "companies_test.rs"]
mod tests;
