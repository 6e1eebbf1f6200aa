//! Selection Module
//! Closed enums for everything the UI collaborator can select: tabs,
//! bar-chart dimensions, numeric columns and relation chart kinds. The
//! dropdowns speak strings on the wire, so each enum parses from and prints
//! to its dropdown value.

use crate::data::{COL_AMOUNT, COL_BOXES, COL_COUNTRY, COL_PRODUCT, COL_SALES_PERSON};

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    DataInfo,
    Distributions,
    Relations,
    BoxPlot,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::DataInfo,
        Tab::Distributions,
        Tab::Relations,
        Tab::BoxPlot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::DataInfo => "data_info",
            Tab::Distributions => "distributions",
            Tab::Relations => "relations",
            Tab::BoxPlot => "box_plot",
        }
    }

    pub fn parse(value: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.as_str() == value)
    }
}

/// Categorical columns available for group-by bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Product,
    Country,
    SalesPerson,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Product, Dimension::Country, Dimension::SalesPerson];

    /// Dropdown value; identical to the dataset column name.
    pub fn as_str(&self) -> &'static str {
        self.column()
    }

    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Product => COL_PRODUCT,
            Dimension::Country => COL_COUNTRY,
            Dimension::SalesPerson => COL_SALES_PERSON,
        }
    }

    pub fn parse(value: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Numeric columns available for histograms and box plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Amount,
    BoxesShipped,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 2] = [NumericColumn::Amount, NumericColumn::BoxesShipped];

    /// Dropdown value; identical to the dataset column name.
    pub fn as_str(&self) -> &'static str {
        self.column()
    }

    pub fn column(&self) -> &'static str {
        match self {
            NumericColumn::Amount => COL_AMOUNT,
            NumericColumn::BoxesShipped => COL_BOXES,
        }
    }

    pub fn parse(value: &str) -> Option<NumericColumn> {
        NumericColumn::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Charts offered on the Relations tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Country,
    Product,
    Salesperson,
    Monthly,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Country,
        RelationKind::Product,
        RelationKind::Salesperson,
        RelationKind::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Country => "country",
            RelationKind::Product => "product",
            RelationKind::Salesperson => "salesperson",
            RelationKind::Monthly => "monthly",
        }
    }

    /// Chart title shown above the rendered figure.
    pub fn title(&self) -> &'static str {
        match self {
            RelationKind::Country => "Total Sales by Country",
            RelationKind::Product => "Best-Selling Chocolate Products",
            RelationKind::Salesperson => "Sales Performance by Salesperson",
            RelationKind::Monthly => "Monthly Sales Trends Over the Year",
        }
    }

    pub fn parse(value: &str) -> Option<RelationKind> {
        RelationKind::ALL.into_iter().find(|k| k.as_str() == value)
    }
}
