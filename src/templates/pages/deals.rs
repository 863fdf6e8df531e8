use crate::domain::EnrichedRecord;
use crate::query::DealsQuery;
use crate::spreadsheets::DEAL_COLUMNS;
use crate::templates::components::{bar_chart, line_chart};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DealsVm<'a> {
    pub query: &'a DealsQuery,
    /// Every location in the upload, for the multi-select.
    pub locations: &'a [String],
    /// Filtered and sorted.
    pub deals: &'a [&'a EnrichedRecord],
    pub total_rows: usize,
    pub mean_price_per_area: f64,
}

pub fn deals_page(vm: &DealsVm) -> Markup {
    desktop_layout(
        "Property Deals",
        html! {
            main class="layout" {
                (filter_sidebar(vm))

                div class="content" {
                    h1 { "🏘️ Property Deal Finder with BRRR Analysis" }
                    p style="color: #6b7280;" {
                        (vm.total_rows) " listings uploaded, average £/m² "
                        strong { (money(vm.mean_price_per_area)) }
                    }

                    div class="status success" {
                        "✅ " (vm.deals.len()) " matching undervalued deals found"
                    }

                    @if vm.deals.is_empty() {
                        div class="status warning" style="margin-top: 0.75rem;" {
                            "⚠️ No deals matched your filters. Try adjusting ROI or cash flow sliders."
                        }
                    } @else {
                        (deals_table(vm.deals))
                        (charts(vm.deals))
                        (downloads(vm.query))
                    }
                }
            }
        },
    )
}

fn filter_sidebar(vm: &DealsVm) -> Markup {
    let filter = &vm.query.filter;
    html! {
        aside class="sidebar" {
            h3 { "🔍 Filter Your Deals" }
            form method="get" action="/deals" {
                input type="hidden" name="dataset" value=(vm.query.dataset);

                label for="location" { "📍 Location" }
                select name="location" id="location" multiple size=(vm.locations.len().clamp(2, 8)) {
                    @for loc in vm.locations {
                        option value=(loc) selected[filter.locations.contains(loc)] { (loc) }
                    }
                }

                label for="min_roi" { "📈 Minimum ROI (%)" }
                input type="range" name="min_roi" id="min_roi" min="0" max="20" step="0.5"
                    value=(filter.min_roi.to_string()) oninput="this.nextElementSibling.value = this.value";
                output { (filter.min_roi.to_string()) }

                label for="min_cash_flow" { "💸 Minimum Monthly Cash Flow (£)" }
                input type="range" name="min_cash_flow" id="min_cash_flow" min="-500" max="1000" step="10"
                    value=(filter.min_cash_flow.to_string()) oninput="this.nextElementSibling.value = this.value";
                output { (filter.min_cash_flow.to_string()) }

                p { button type="submit" { "Apply filters" } }
            }
        }
    }
}

fn deals_table(deals: &[&EnrichedRecord]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for header in DEAL_COLUMNS {
                        th scope="col" { (header) }
                    }
                }
            }
            tbody {
                @for deal in deals {
                    tr {
                        td title=(deal.label.as_str()) { (deal.label.badge()) }
                        td { (deal.property.address) }
                        td class="num" { (money(deal.property.price)) }
                        td class="num" { (deal.property.area.to_string()) }
                        td class="num" { (money(deal.price_per_area)) }
                        td class="num" { (money(deal.estimated_rent)) }
                        td class="num" { (money(deal.monthly_cash_flow)) }
                        td class="num" { (format!("{:.2}", deal.annual_roi)) }
                        td class="num" { (money(deal.cash_pulled_out)) }
                        td { a href=(deal.maps_link) target="_blank" rel="noopener" { "Map" } }
                    }
                }
            }
        }
    }
}

fn charts(deals: &[&EnrichedRecord]) -> Markup {
    let roi: Vec<(&str, f64)> = deals
        .iter()
        .map(|d| (d.property.address.as_str(), d.annual_roi))
        .collect();
    let cash: Vec<(&str, f64)> = deals
        .iter()
        .map(|d| (d.property.address.as_str(), d.monthly_cash_flow))
        .collect();

    html! {
        section class="card" {
            h3 { "📊 ROI vs Property" }
            (bar_chart("Annual ROI (%)", &roi, "%"))
        }
        section class="card" {
            h3 { "💵 Monthly Cash Flow Distribution" }
            (line_chart("Monthly Cash Flow (£)", &cash, ""))
        }
    }
}

fn downloads(query: &DealsQuery) -> Markup {
    let qs = query.to_query_string();
    html! {
        section class="card" {
            a href=(format!("/deals/export.csv?{qs}")) { "⬇️ Download Filtered Deals as CSV" }
            " · "
            a href=(format!("/deals/export.xlsx?{qs}")) { "Excel workbook" }
        }
    }
}

fn money(v: f64) -> String {
    format!("{v:.2}")
}
