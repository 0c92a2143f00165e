use common::{Artifact, ImageRef, TextArtifact, TextSection};

pub const OVERVIEW_IMAGE: &str = "giphy.gif";

fn section(heading: &str, body: &str) -> TextSection {
    TextSection {
        heading: heading.to_string(),
        body: body.trim().to_string(),
    }
}

/// Project summary with the spread animation.
pub fn render_overview() -> Artifact {
    Artifact::Text(TextArtifact {
        title: "COVID-19 Data Analysis for India".to_string(),
        image: Some(ImageRef {
            path: OVERVIEW_IMAGE.to_string(),
            caption: "COVID-19 Spread Animation".to_string(),
        }),
        sections: vec![
            section(
                "About This Project",
                "This project provides an interactive dashboard for visualizing COVID-19 cases in India.",
            ),
            section(
                "Project Objective",
                r#"
- Analyze and visualize COVID-19 case trends across the states and union territories of India.
- Allow users to explore the data interactively to understand the impact of the pandemic.
"#,
            ),
            section(
                "Technologies & Tools Used",
                r#"
- **Rust** (data processing and HTTP API)
- **Polars** (data manipulation)
- **Axum** (web service)
- **Plotly** (charts)
- **GeoJSON** (map markers)
"#,
            ),
            section(
                "Features",
                r#"
- **Dashboard**: trends in confirmed, recovered and death cases.
- **Interactive Map**: COVID-19 impact per state.
- **SMA Forecast**: short-term trend from a simple moving average.
"#,
            ),
        ],
        closing: None,
    })
}

/// Usage guide and explanations of the computed views.
pub fn render_how_to_use() -> Artifact {
    Artifact::Text(TextArtifact {
        title: "How to Use This Application & Key Concepts".to_string(),
        image: None,
        sections: vec![
            section(
                "How to Use This Application",
                r#"
Follow these steps to explore COVID-19 trends in India:

1. **Overview** - Learn about the project and the technologies used.
2. **COVID-19 Dashboard** - Select a state to see confirmed, recovered and death cases over time.
3. **Comparison Chart** - Compare COVID-19 trends between two states.
4. **COVID-19 Map** - View a map showing COVID-19 spread across states.
5. **SMA Forecast** - Follow case trends using a **Simple Moving Average (SMA)**.
6. **Time-Lapse Map** - Watch the spread of COVID-19 over time on an animated map.

Use the page menu to move between sections.
"#,
            ),
            section(
                "Simple Moving Average (SMA)",
                r#"
- **SMA** smooths the series so the trend is easier to see.
- It averages confirmed cases over the last 7 rows of the selected state.
- **Formula**: `SMA(n) = (X1 + X2 + ... + Xn) / n`, where `X1..Xn` are the last `n` values.
- The first six rows have no average and are left blank. Nothing is extrapolated.
"#,
            ),
            section(
                "Comparing COVID-19 Trends Between Two States",
                r#"
- The **Comparison Chart** shows the latest confirmed, recovered and death counts for two selected states.
- Both states are drawn as line charts on one figure; the second state's lines are dashed.
- The same state may be selected twice.
"#,
            ),
            section(
                "Interactive Map for COVID-19 Cases",
                r#"
- Each state is drawn as a **red circle** sized by its confirmed cases on the latest reported date.
- Radius is `max(5, confirmed / 50000)`.
- Each marker's popup shows the state's confirmed cases and deaths.
- States without a known location are left off the map and listed separately.
"#,
            ),
            section(
                "COVID-19 Dashboard",
                r#"
- Displays trends for **Confirmed, Recovered and Death** cases in a selected state.
- Uses Plotly line charts to show how cases evolved over time.
"#,
            ),
            section(
                "Technologies & Libraries Used",
                r#"
- **Rust**: core language for data processing and the service.
- **Polars**: loading, filtering and rolling windows over the case table.
- **Axum**: HTTP API serving the rendered pages.
- **Plotly**: chart figures.
- **GeoJSON**: marker collections for the maps.
"#,
            ),
        ],
        closing: Some(
            "You are now ready to explore the COVID-19 trends in India! Use the page menu to navigate through the sections."
                .to_string(),
        ),
    })
}
