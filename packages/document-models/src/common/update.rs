//! Field-level partial update rules shared by every `UPDATE_*` reducer.

/// Overwrite `target` when a value was supplied.
pub fn set_if_present<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Overwrite a required-looking string when a non-empty value was supplied.
///
/// An empty string is treated like an absent field.
pub fn set_non_empty(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            target.clone_from(value);
        }
    }
}

/// Apply a tri-state update to a nullable field.
pub fn set_nullable<T: Clone>(target: &mut Option<T>, value: &Option<Option<T>>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_leaves_value_unchanged() {
        let mut title = "Hosting".to_string();
        set_non_empty(&mut title, &Some(String::new()));
        assert_eq!(title, "Hosting");

        set_non_empty(&mut title, &None);
        assert_eq!(title, "Hosting");

        set_non_empty(&mut title, &Some("Managed hosting".into()));
        assert_eq!(title, "Managed hosting");
    }

    #[test]
    fn nullable_distinguishes_clear_from_absent() {
        let mut description = Some("old".to_string());

        set_nullable(&mut description, &None);
        assert_eq!(description.as_deref(), Some("old"));

        set_nullable(&mut description, &Some(None));
        assert_eq!(description, None);

        set_nullable(&mut description, &Some(Some("new".into())));
        assert_eq!(description.as_deref(), Some("new"));
    }
}
