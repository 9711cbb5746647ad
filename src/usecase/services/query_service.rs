use crate::domain::entities::dataset::{Dataset, FilterOptions, FilteredView};
use crate::domain::entities::filters::FilterState;

pub fn filtered_view(dataset: &Dataset, filters: &FilterState) -> FilteredView {
    let mut monthly = dataset.monthly.clone();
    let mut dealers = dataset.dealers.clone();
    let mut regions = dataset.regions.clone();
    let mut products = dataset.products.clone();
    let mut recent_claims = dataset.recent_claims.clone();

    if let Some(region) = &filters.region {
        monthly.retain(|row| &row.region == region);
        dealers.retain(|row| &row.region == region);
        regions.retain(|row| &row.region == region);
        recent_claims.retain(|row| &row.region == region);
    }

    if let Some(product) = &filters.product {
        monthly.retain(|row| &row.product == product);
        dealers.retain(|row| &row.product == product);
        products.retain(|row| &row.product == product);
        recent_claims.retain(|row| &row.product == product);
    }

    if let Some(dealer) = &filters.dealer {
        dealers.retain(|row| &row.name == dealer);
    }

    if let Some(window) = filters.date_range.window_months() {
        let keep_from = monthly.len().saturating_sub(window);
        monthly.drain(..keep_from);
    }

    FilteredView {
        monthly,
        dealers,
        regions,
        products,
        recent_claims,
        claim_types: dataset.claim_types.clone(),
    }
}

pub fn filter_options(dataset: &Dataset) -> FilterOptions {
    let mut regions: Vec<String> = dataset
        .monthly
        .iter()
        .map(|row| row.region.clone())
        .chain(dataset.dealers.iter().map(|row| row.region.clone()))
        .collect();
    regions.sort();
    regions.dedup();

    let mut products: Vec<String> = dataset
        .monthly
        .iter()
        .map(|row| row.product.clone())
        .chain(dataset.dealers.iter().map(|row| row.product.clone()))
        .collect();
    products.sort();
    products.dedup();

    let mut dealers: Vec<String> = dataset
        .dealers
        .iter()
        .map(|row| row.name.clone())
        .collect();
    dealers.sort();
    dealers.dedup();

    FilterOptions {
        regions,
        products,
        dealers,
    }
}
