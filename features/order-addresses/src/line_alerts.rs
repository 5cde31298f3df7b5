//! Alerts shown under draft order lines.

use crate::error::OrderError;
use crate::messages::LINE_NOT_AVAILABLE;
use crate::order_errors::order_error_message;
use dashboard_core::messages::MessageCatalog;
use serde::{Deserialize, Serialize};

/// The parts of an order line the alerts look at
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Line id
    pub id: String,
    /// Product name
    pub product_name: String,
    /// Whether the variant's product can still be bought
    pub is_available_for_purchase: bool,
}

/// Alert texts for a line: the line's error first, then availability.
#[must_use]
pub fn line_alerts(
    line: &OrderLine,
    error: Option<&OrderError>,
    catalog: &dyn MessageCatalog,
) -> Vec<String> {
    let mut alerts = Vec::with_capacity(2);
    if let Some(error) = error {
        alerts.push(order_error_message(error, catalog));
    }
    if !line.is_available_for_purchase {
        alerts.push(catalog.message(&LINE_NOT_AVAILABLE));
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderErrorCode;
    use dashboard_core::messages::DefaultCatalog;

    fn line(available: bool) -> OrderLine {
        OrderLine {
            id: "line-1".into(),
            product_name: "Juice".into(),
            is_available_for_purchase: available,
        }
    }

    #[test]
    fn error_comes_before_availability() {
        let error = OrderError::new(OrderErrorCode::InsufficientStock);

        let alerts = line_alerts(&line(false), Some(&error), &DefaultCatalog);

        assert_eq!(
            alerts,
            vec![
                "Insufficient stock".to_string(),
                "This product is no longer available for purchase".to_string(),
            ]
        );
    }

    #[test]
    fn healthy_line_has_no_alerts() {
        assert!(line_alerts(&line(true), None, &DefaultCatalog).is_empty());
    }
}
