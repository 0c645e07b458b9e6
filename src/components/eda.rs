//! EDA journey view
//!
//! Static walkthrough of the data-engineering work behind the dashboard: the
//! target star schema, sample rows from the main datasets, and the cleaning
//! and transformation steps. Nothing here touches the network; the only state
//! is which dataset preview tab is open.

use leptos::*;

struct SchemaTable {
    name: &'static str,
    role: &'static str,
    columns: &'static [&'static str],
}

const STAR_SCHEMA: &[SchemaTable] = &[
    SchemaTable {
        name: "FactSales",
        role: "Fact",
        columns: &["sale_id", "customer_id", "medicine_id", "shop_id", "final_price", "status"],
    },
    SchemaTable {
        name: "DimCustomer",
        role: "Dimension",
        columns: &["customer_id", "full_name", "age", "city", "phone", "email"],
    },
    SchemaTable {
        name: "DimMedicine",
        role: "Dimension",
        columns: &["medicine_id", "medicine_name", "type_id", "price", "brand"],
    },
    SchemaTable {
        name: "DimShop",
        role: "Dimension",
        columns: &["shop_id", "location", "manager_name", "rating"],
    },
    SchemaTable {
        name: "DimPrescription",
        role: "Dimension",
        columns: &["prescription_id", "doctor_name", "dosage", "date"],
    },
    SchemaTable {
        name: "FactStock",
        role: "Fact",
        columns: &["stock_id", "shop_id", "medicine_id", "available_units"],
    },
];

struct Preview {
    name: &'static str,
    headers: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
}

const PREVIEWS: &[Preview] = &[
    Preview {
        name: "Customers",
        headers: &["customer_id", "full_name", "city", "age"],
        rows: &[
            &["CUST1000", "Ishita Shah", "Ahmedabad", "66"],
            &["CUST1001", "Anita Singh", "Chennai", "35"],
            &["CUST1002", "Arjun Khan", "Hyderabad", "32"],
        ],
    },
    Preview {
        name: "Medicine",
        headers: &["medicine_id", "medicine_name", "price", "brand"],
        rows: &[
            &["MED2000", "Drug4806", "319.0", "Dr Reddy's"],
            &["MED2001", "Drug13", "407.0", "Dr Reddy's"],
            &["MED2002", "Drug3936", "421.0", "Cipla"],
        ],
    },
    Preview {
        name: "SalesBills",
        headers: &["sale_id", "customer_id", "final_price", "status", "payment_mode"],
        rows: &[
            &["SALE5000", "CUST4690", "483.0", "Cancelled", "Card"],
            &["SALE5001", "CUST4223", "565.0", "Pending", "UPI"],
            &["SALE5002", "CUST1800", "204.0", "Cancelled", "Cash"],
        ],
    },
];

struct Step {
    title: &'static str,
    description: &'static str,
    details: &'static [&'static str],
    outcome: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "1. Entity Relationship Mapping",
        description: "Mapped raw CSVs to a star schema with fact tables for sales and stock.",
        details: &[
            "Defined relationships such as Sales.customer_id -> Customers.",
            "Designed the schema for analytical queries.",
        ],
        outcome: "All foreign keys resolve against their dimensions.",
    },
    Step {
        title: "2. Data Quality & Validity",
        description: "Checked dataset integrity before any modeling.",
        details: &[
            "Scanned every table for missing values.",
            "Validated numerical ranges for age and price.",
        ],
        outcome: "19 out-of-range ages flagged.",
    },
    Step {
        title: "3. Handling Missing Values",
        description: "Imputed the 313 missing age values with the median to avoid skew.",
        details: &["Median imputation keeps the age distribution intact."],
        outcome: "No missing ages after imputation.",
    },
    Step {
        title: "4. Data Cleansing",
        description: "Standardized city names and validated contact fields.",
        details: &[
            "Collapsed spelling variants ('Hydrabad' -> 'Hyderabad').",
            "Flagged malformed emails and phone numbers.",
        ],
        outcome: "City names standardized, invalid emails flagged.",
    },
    Step {
        title: "5. Transformation & Feature Engineering",
        description: "Derived the features the regression models train on.",
        details: &[
            "expected_amount = quantity * price.",
            "One-hot encoded the payment mode.",
        ],
        outcome: "New features: expected_amount, payment_mode_*.",
    },
];

/// EDA walkthrough page
#[component]
pub fn EdaView() -> impl IntoView {
    view! {
        <div class="view active" role="main" aria-label="EDA journey">
            <h2 class="section-title">"Exploratory Data Analysis Journey"</h2>
            <SchemaPanel/>
            <PreviewPanel/>
            <StepsPanel/>
        </div>
    }
}

#[component]
fn SchemaPanel() -> impl IntoView {
    view! {
        <div class="table-card" role="region" aria-label="Star schema">
            <div class="table-header">
                <div class="table-title">"Target Star Schema"</div>
            </div>
            <div class="schema-grid">
                {STAR_SCHEMA
                    .iter()
                    .map(|table| view! {
                        <div class="schema-table" class:fact=table.role == "Fact">
                            <h4>
                                {table.name}
                                <span class="schema-role">{format!(" ({})", table.role)}</span>
                            </h4>
                            <ul>
                                {table.columns.iter().map(|c| view! { <li class="mono">{*c}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PreviewPanel() -> impl IntoView {
    let (active, set_active) = create_signal(0usize);

    view! {
        <div class="table-card" role="region" aria-label="Dataset previews">
            <div class="table-header">
                <div class="table-title">"Data Previews"</div>
            </div>
            <div class="model-selector" role="tablist" aria-label="Dataset">
                {PREVIEWS
                    .iter()
                    .enumerate()
                    .map(|(index, preview)| view! {
                        <button
                            class="pill-btn"
                            class:active=move || active.get() == index
                            role="tab"
                            on:click=move |_| set_active.set(index)
                        >
                            {preview.name}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                let preview = &PREVIEWS[active.get()];
                view! {
                    <table role="table" aria-label=preview.name>
                        <thead>
                            <tr>
                                {preview.headers.iter().map(|h| view! { <th scope="col">{*h}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {preview
                                .rows
                                .iter()
                                .map(|row| view! {
                                    <tr>
                                        {row.iter().map(|cell| view! { <td>{*cell}</td> }).collect_view()}
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}

#[component]
fn StepsPanel() -> impl IntoView {
    view! {
        <div class="steps-timeline">
            {STEPS
                .iter()
                .map(|step| view! {
                    <div class="table-card step-card">
                        <div class="table-header">
                            <div class="table-title">{step.title}</div>
                        </div>
                        <div class="card-body">
                            <p>{step.description}</p>
                            <ul>
                                {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                            </ul>
                            <p class="step-outcome">
                                <strong>"Outcome: "</strong>
                                {step.outcome}
                            </p>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
