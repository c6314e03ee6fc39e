use crate::models::{ListingType, PropertyRecord};

/// Format a price for display. Rentals are shown per month.
pub fn format_price(price: u64, listing_type: ListingType) -> String {
    let amount = group_thousands(price);
    match listing_type {
        ListingType::Sale => format!("${}", amount),
        ListingType::Rent => format!("${}/month", amount),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Multi-line summary of one listing, numbered by its position in the results
pub fn render_property(index: usize, property: &PropertyRecord) -> String {
    let mut out = format!(
        "{}. {} ({})\n",
        index,
        property.title,
        format_price(property.price, property.listing_type)
    );
    out.push_str(&format!(
        "   {} bed, {} bath, {} sqft {} for {}\n",
        property.bedrooms,
        property.bathrooms,
        group_thousands(u64::from(property.area_sqft)),
        property.property_type,
        property.listing_type
    ));
    out.push_str(&format!("   Location: {}\n", property.location));
    if !property.features.is_empty() {
        out.push_str(&format!("   Features: {}\n", property.features.join(", ")));
    }
    out.push_str(&format!("   ID: {}\n", property.id));
    out
}
