//! Static template content written by the scaffold
//!
//! Every file `hsa setup` writes is defined here, verbatim. Only the slide
//! deck has dynamic content (the generation date on the title slide);
//! everything else is byte-fixed so repeated scaffolds are reproducible.

/// Ignore rules for the scaffolded repository.
///
/// Keeps the virtual environment, real secrets, and generated artifacts out
/// of version control.
pub const GITIGNORE: &str = r"# Python
__pycache__/
*.pyc
venv/

# Secrets
.env

# Jupyter
.ipynb_checkpoints/

# Generated artifacts
output/*.png
*.duckdb

# OS
.DS_Store
";

/// Secrets template, copied to `.env` on first launch.
///
/// Variable names and defaults mirror what the application's config layer
/// reads. Placeholder values only; nothing here is validated by hsa itself.
pub const ENV_EXAMPLE: &str = r"# OpenAI
OPENAI_API_KEY=your-api-key-here
OPENAI_MODEL=gpt-4

# Database
DATABASE_URL=sqlite:///helpscout_data.db
DUCKDB_PATH=helpscout_data.duckdb

# Application
STREAMLIT_PORT=8501
DEBUG_MODE=True
MAX_QUERY_RESULTS=100
CACHE_TTL=300
";

/// Python dependency manifest installed into the virtual environment.
pub const REQUIREMENTS: &str = r"streamlit>=1.28.0
pandas>=2.0.0
numpy>=1.24.0
plotly>=5.15.0
duckdb>=0.9.0
openai>=1.0.0
python-dotenv>=1.0.0
jupyter>=1.0.0
";

/// Project README stub.
pub const README: &str = r"# Help Scout Analytics Demo

A conversational interface for exploring Help Scout customer data:
ask questions in plain English, get back tables and charts.

## Getting started

1. Copy `.env.example` to `.env` and fill in your OpenAI API key.
2. Drop the customer CSV exports into `data/` (see `data/README.md`).
3. Launch the app with `hsa run`.

The exploratory notebook lives in `notebooks/`, the final walkthrough deck
in `presentation/`.
";

/// README stub for the data drop-in directory.
pub const DATA_README: &str = r"# Data

Place the Help Scout CSV exports here:

- `customer.csv` — one row per customer (id, name)
- `customer_activity.csv` — support activity per customer
- `plan.csv` — plan and billing information

If the files are missing the app generates sample data with the same schema,
so everything works end to end without real exports.
";

/// Build the placeholder analysis notebook (nbformat 4).
///
/// One markdown cell introducing the notebook and one empty code cell to
/// start from.
pub fn notebook_json() -> anyhow::Result<String> {
    let notebook = serde_json::json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": [
                    "# Help Scout Analytics - Exploration\n",
                    "\n",
                    "Scratchpad for exploring the customer data before it is\n",
                    "wired into the app. Load the CSVs from `../data/`."
                ]
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": []
            }
        ],
        "metadata": {
            "kernelspec": {
                "display_name": "Python 3",
                "language": "python",
                "name": "python3"
            },
            "language_info": {
                "name": "python",
                "version": "3.11"
            }
        },
        "nbformat": 4,
        "nbformat_minor": 5
    });
    Ok(serde_json::to_string_pretty(&notebook)?)
}

/// Build the slide deck skeleton, stamped with the generation date.
#[must_use]
pub fn slide_deck(date: &str) -> String {
    format!(
        r"---
title: Help Scout Analytics Demo
date: {date}
---

# Help Scout Analytics

Conversational insights over customer support data

---

# The Problem

- Support data is rich but locked behind dashboards
- Ad-hoc questions need an analyst in the loop

---

# The Approach

- Ingest Help Scout CSV exports into DuckDB
- Translate plain-English questions to SQL
- Render answers as tables and charts

---

# Demo

(live walkthrough)

---

# Next Steps

- Scheduled ingestion
- Saved questions and alerting
"
    )
}
