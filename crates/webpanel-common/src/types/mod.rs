mod core;
mod property;

pub use self::core::*;
pub use property::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PanelError;

    #[test]
    fn slot_round_trips_through_names() {
        for slot in Slot::ALL {
            assert_eq!(slot.as_str().parse::<Slot>(), Ok(slot));
        }
    }

    #[test]
    fn slot_rejects_unknown_name() {
        let err = "sideways".parse::<Slot>().unwrap_err();
        assert!(err.contains("sideways"));
    }

    #[test]
    fn slot_default_is_after_browser() {
        assert_eq!(Slot::default(), Slot::AfterBrowser);
    }

    #[test]
    fn slot_serializes_as_snake_case() {
        let json = serde_json::to_string(&Slot::BelowBrowser).unwrap();
        assert_eq!(json, "\"below_browser\"");
        let slot: Slot = serde_json::from_str("\"above_browser\"").unwrap();
        assert_eq!(slot, Slot::AboveBrowser);
    }

    #[test]
    fn shutdown_reason_app_shutdown() {
        assert!(ShutdownReason::AppShutdown.is_app_shutdown());
        assert!(!ShutdownReason::AddonDisable.is_app_shutdown());
        let reason: ShutdownReason = serde_json::from_str("\"APP_SHUTDOWN\"").unwrap();
        assert_eq!(reason, ShutdownReason::AppShutdown);
    }

    #[test]
    fn property_parse() {
        assert_eq!("title".parse::<PanelProperty>(), Ok(PanelProperty::Title));
        assert_eq!(
            "collapsed".parse::<PanelProperty>(),
            Ok(PanelProperty::Collapsed)
        );
        assert_eq!(
            "icon".parse::<PanelProperty>(),
            Err(PanelError::UnknownProperty("icon".into()))
        );
    }

    #[test]
    fn property_value_as_slot() {
        let v = PropertyValue::from("below_browser");
        assert_eq!(v.as_slot(), Ok(Slot::BelowBrowser));

        let v = PropertyValue::from(true);
        assert!(matches!(
            v.as_slot(),
            Err(PanelError::InvalidValue { property: "location", .. })
        ));

        let v = PropertyValue::from("nowhere");
        assert!(v.as_slot().is_err());
    }

    #[test]
    fn property_value_untagged_json() {
        let v: PropertyValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, PropertyValue::Bool(true));
        let v: PropertyValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(v, PropertyValue::Text("hello".into()));
    }
}
