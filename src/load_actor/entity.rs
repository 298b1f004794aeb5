//! Entity trait implementation for the Load domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Load`] to be managed by the generic [`crate::framework::ResourceActor`].
//! Field validation lives in `from_create_params`; the open-to-booked flip
//! lives in `handle_action`.

use async_trait::async_trait;
use chrono::Utc;

use super::actions::LoadAction;
use crate::framework::{ActorEntity, FrameworkError};
use crate::model::{Load, LoadCreate, LoadId, LoadStatus};

#[async_trait]
impl ActorEntity for Load {
    type Id = LoadId;
    type CreateParams = LoadCreate;
    type Action = LoadAction;
    type ActionResult = Load;
    type Context = ();

    /// Creates a new open Load from creation parameters.
    ///
    /// Every field is required; weight and price must be positive finite
    /// numbers. A failed validation leaves the registry untouched.
    fn from_create_params(id: LoadId, params: LoadCreate) -> Result<Self, FrameworkError> {
        if params.origin.trim().is_empty() {
            return Err(FrameworkError::InvalidInput("origin is required".into()));
        }
        if params.destination.trim().is_empty() {
            return Err(FrameworkError::InvalidInput(
                "destination is required".into(),
            ));
        }
        if params.material.trim().is_empty() {
            return Err(FrameworkError::InvalidInput("material is required".into()));
        }
        if !params.weight.is_finite() || params.weight <= 0.0 {
            return Err(FrameworkError::InvalidInput(
                "weight must be a positive number".into(),
            ));
        }
        if !params.price.is_finite() || params.price <= 0.0 {
            return Err(FrameworkError::InvalidInput(
                "price must be a positive number".into(),
            ));
        }
        if params.customer_id.0 == 0 {
            return Err(FrameworkError::InvalidInput("customerId is required".into()));
        }

        Ok(Load {
            id,
            origin: params.origin,
            destination: params.destination,
            weight: params.weight,
            material: params.material,
            price: params.price,
            customer_id: params.customer_id,
            status: LoadStatus::Open,
            created_at: Utc::now(),
        })
    }

    /// Handles custom actions for the Load entity.
    ///
    /// `MarkBooked` flips the status and returns the updated record; a load
    /// that is not open conflicts. Status never transitions back.
    async fn handle_action(
        &mut self,
        action: LoadAction,
        _ctx: &Self::Context,
    ) -> Result<Load, FrameworkError> {
        match action {
            LoadAction::MarkBooked => {
                if self.status != LoadStatus::Open {
                    return Err(FrameworkError::Conflict(format!(
                        "load {} is already booked",
                        self.id
                    )));
                }
                self.status = LoadStatus::Booked;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerId;

    fn valid_params() -> LoadCreate {
        LoadCreate {
            origin: "Delhi".into(),
            destination: "Jaipur".into(),
            weight: 10.0,
            material: "steel".into(),
            price: 5000.0,
            customer_id: CustomerId(7),
        }
    }

    #[test]
    fn test_create_sets_open_status() {
        let load = Load::from_create_params(LoadId(1), valid_params()).unwrap();
        assert_eq!(load.id, LoadId(1));
        assert_eq!(load.status, LoadStatus::Open);
        assert_eq!(load.customer_id, CustomerId(7));
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        for field in ["origin", "destination", "material"] {
            let mut params = valid_params();
            match field {
                "origin" => params.origin = "  ".into(),
                "destination" => params.destination = String::new(),
                _ => params.material = String::new(),
            }
            let err = Load::from_create_params(LoadId(1), params).unwrap_err();
            assert!(matches!(err, FrameworkError::InvalidInput(_)), "{field}");
        }
    }

    #[test]
    fn test_create_rejects_non_positive_numbers() {
        let mut params = valid_params();
        params.weight = 0.0;
        assert!(matches!(
            Load::from_create_params(LoadId(1), params).unwrap_err(),
            FrameworkError::InvalidInput(_)
        ));

        let mut params = valid_params();
        params.price = -5.0;
        assert!(matches!(
            Load::from_create_params(LoadId(1), params).unwrap_err(),
            FrameworkError::InvalidInput(_)
        ));

        let mut params = valid_params();
        params.weight = f64::NAN;
        assert!(matches!(
            Load::from_create_params(LoadId(1), params).unwrap_err(),
            FrameworkError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn test_mark_booked_flips_once() {
        let mut load = Load::from_create_params(LoadId(1), valid_params()).unwrap();

        let updated = load.handle_action(LoadAction::MarkBooked, &()).await.unwrap();
        assert_eq!(updated.status, LoadStatus::Booked);
        assert_eq!(load.status, LoadStatus::Booked);

        let err = load
            .handle_action(LoadAction::MarkBooked, &())
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Conflict(_)));
    }

    #[test]
    fn test_wire_casing() {
        let load = Load::from_create_params(LoadId(3), valid_params()).unwrap();
        let json = serde_json::to_value(&load).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["customerId"], 7);
        assert_eq!(json["status"], "open");
        assert!(json["createdAt"].is_string());
    }
}
