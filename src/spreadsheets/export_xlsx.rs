use crate::config::SiteSettings;
use crate::domain::ListingSummary;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

/// Listings as an XLSX workbook. Stat columns follow `settings.stats_keys`.
pub fn listings_workbook(
    listings: &[ListingSummary],
    settings: &SiteSettings,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    // Headers
    let mut headers: Vec<&str> = vec![
        "ID",
        "Title",
        "Type",
        "Objective",
        "Status",
        "City",
        "Price",
        "Featured",
    ];
    let fixed_columns = headers.len();
    headers.extend(settings.stats_keys.iter().map(String::as_str));

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.id as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.title)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write title: {}", e)))?;

        worksheet
            .write_string(r, 2, settings.kind_label(listing.kind))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write type: {}", e)))?;

        worksheet
            .write_string(r, 3, settings.objective_label(listing.objective))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write objective: {}", e)))?;

        worksheet
            .write_string(r, 4, listing.status.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        worksheet
            .write_string(r, 5, &listing.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        worksheet
            .write_number_with_format(r, 6, listing.price_cents as f64 / 100.0, &money)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_string(r, 7, if listing.featured { "Yes" } else { "No" })
            .map_err(|e| ServerError::XlsxError(format!("Failed to write featured: {}", e)))?;

        for (offset, key) in settings.stats_keys.iter().enumerate() {
            let value = listing.stats.get(key).map(String::as_str).unwrap_or("");
            worksheet
                .write_string(r, (fixed_columns + offset) as u16, value)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write stat '{key}': {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListingStatus;
    use std::collections::BTreeMap;

    #[test]
    fn workbook_is_a_zip_container() {
        let mut stats = BTreeMap::new();
        stats.insert("Quartos".to_string(), "3".to_string());
        let listing = ListingSummary {
            id: 1,
            title: "Casa".to_string(),
            status: ListingStatus::Recent,
            kind: 1,
            objective: 1,
            price_cents: 12_500_000,
            city: "Santos".to_string(),
            featured: true,
            stats,
            cover_url: None,
        };

        let bytes = listings_workbook(&[listing], &SiteSettings::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
