//! Tests for the model types and their JSON shape.

use jiff::civil::date;

use super::*;

#[test]
fn test_priority_orders_high_first() {
    let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
    priorities.sort();
    assert_eq!(priorities, [Priority::High, Priority::Medium, Priority::Low]);
    assert_eq!(Priority::default(), Priority::Medium);
    assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_tier_includes_lower_tiers() {
    assert!(SubscriptionTier::Basic < SubscriptionTier::Pro);
    assert_eq!("PRO".parse::<SubscriptionTier>(), Ok(SubscriptionTier::Pro));
}

#[test]
fn test_question_defaults() {
    let question: Question = serde_json::from_str(
        r#"{ "id": "severance", "label": "Severance offered?", "section": "Finances",
             "type": "select", "formType": "assessment" }"#,
    )
    .unwrap();

    assert!(question.is_active);
    assert!(question.options.is_empty());
    assert_eq!(question.question_type, QuestionType::Select);
    assert!(question.in_project(Some("any")));
}

#[test]
fn test_project_scoping() {
    let question: Question = serde_json::from_str(
        r#"{ "id": "visa", "label": "Visa status", "section": "Personal", "type": "text",
             "formType": "profile", "projectIds": ["p1"] }"#,
    )
    .unwrap();

    assert!(question.in_project(Some("p1")));
    assert!(!question.in_project(Some("p2")));
    assert!(question.in_project(None));
}

#[test]
fn test_follow_up_trigger() {
    let follow_up: Question = serde_json::from_str(
        r#"{ "id": "cobraCost", "label": "COBRA cost", "section": "Benefits", "type": "text",
             "formType": "assessment", "parentId": "hadMedicalInsurance", "triggerValue": "Yes" }"#,
    )
    .unwrap();

    assert!(!follow_up.is_triggered_by(&AnswerSet::new()));
    assert!(!follow_up.is_triggered_by(&AnswerSet::new().with_answer("hadMedicalInsurance", "No")));
    assert!(follow_up.is_triggered_by(&AnswerSet::new().with_answer("hadMedicalInsurance", "Yes")));
}

#[test]
fn test_answer_values() {
    let answers: AnswerSet = serde_json::from_str(
        r#"{ "answers": { "concerns": ["Health", "Money"], "severance": "  ", "state": "CA" },
             "birthYear": 1980 }"#,
    )
    .unwrap();

    assert!(answers.get("concerns").is_some_and(|a| a.matches("Money")));
    assert!(!answers.is_answered("severance"));
    assert!(!answers.is_answered("missing"));
    assert_eq!(answers.birth_year(), Some(1980));
    assert!(!AnswerValue::Multiple(vec![]).is_answered());
}

#[test]
fn test_raw_fields_fall_back_to_answers() {
    let answers = AnswerSet::new()
        .with_answer("birthYear", "1975")
        .with_answer("startDate", "2015-06-01")
        .with_answer("finalDate", "not a date");

    assert_eq!(answers.birth_year(), Some(1975));
    assert_eq!(answers.start_date(), Some(date(2015, 6, 1)));
    assert_eq!(answers.final_date(), None);

    let explicit = answers.with_birth_year(1990);
    assert_eq!(explicit.birth_year(), Some(1990));
}

#[test]
fn test_numeric_condition_accepts_single_bound() {
    let condition: Condition = serde_json::from_str(
        r#"{ "type": "age", "operator": "gte", "value": 40, "label": "40 and over" }"#,
    )
    .unwrap();

    let Condition::Age(numeric) = condition else {
        panic!("expected an age condition");
    };
    assert_eq!(numeric.bounds, [40]);
    assert!(numeric.is_well_formed());
    assert!(numeric.matches(Some(40)));
    assert!(!numeric.matches(Some(39)));
    assert!(!numeric.matches(None));
}

#[test]
fn test_range_condition() {
    let condition: Condition = serde_json::from_str(
        r#"{ "type": "tenure", "operator": "gte_lt", "value": [2, 5] }"#,
    )
    .unwrap();

    let Condition::Tenure(numeric) = condition else {
        panic!("expected a tenure condition");
    };
    assert!(numeric.matches(Some(2)));
    assert!(numeric.matches(Some(4)));
    assert!(!numeric.matches(Some(5)));
}

#[test]
fn test_unknown_condition_type_and_operator_still_load() {
    let rule: GuidanceRule = serde_json::from_str(
        r#"{ "id": "r1", "questionId": "salary", "type": "computed",
             "conditions": [
                 { "type": "salary", "operator": "gte", "value": 100000 },
                 { "type": "age", "operator": "between", "value": [30, 40] }
             ],
             "tipIds": ["t1"] }"#,
    )
    .unwrap();

    assert_eq!(rule.conditions[0], Condition::Unsupported);
    let Condition::Age(numeric) = &rule.conditions[1] else {
        panic!("expected an age condition");
    };
    assert_eq!(numeric.operator, Operator::Unknown);
    assert!(!numeric.is_well_formed());
    assert!(!numeric.matches(Some(35)));
}

#[test]
fn test_missing_operator_reads_as_unknown() {
    let rule: GuidanceRule = serde_json::from_str(
        r#"{ "id": "r", "questionId": "q", "type": "computed",
             "conditions": [{ "type": "tenure", "value": [1, 3], "label": "x" }],
             "taskIds": ["t"] }"#,
    )
    .unwrap();

    let Condition::Tenure(numeric) = &rule.conditions[0] else {
        panic!("expected a tenure condition");
    };
    assert_eq!(numeric.operator, Operator::Unknown);
    assert_eq!(numeric.bounds, [1, 3]);
    assert!(!numeric.matches(Some(2)));
}

#[test]
fn test_direct_condition_without_question_is_unsupported() {
    let rule: GuidanceRule = serde_json::from_str(
        r#"{ "id": "r", "questionId": "q",
             "conditions": [
                 { "type": "direct", "answer": "Yes" },
                 { "type": "direct", "questionId": "q", "answer": "Yes" }
             ],
             "taskIds": ["t"] }"#,
    )
    .unwrap();

    assert_eq!(rule.conditions[0], Condition::Unsupported);
    assert_eq!(rule.conditions[1], Condition::answer("q", "Yes"));
}

#[test]
fn test_fractional_bounds_read_as_empty() {
    let rule: GuidanceRule = serde_json::from_str(
        r#"{ "id": "r", "questionId": "q", "type": "computed",
             "conditions": [
                 { "type": "age", "operator": "gte", "value": 40.5 },
                 { "type": "age", "operator": "gte_lt", "value": [40, "fifty"] }
             ],
             "taskIds": ["t"] }"#,
    )
    .unwrap();

    for condition in &rule.conditions {
        let Condition::Age(numeric) = condition else {
            panic!("expected an age condition");
        };
        assert!(numeric.bounds.is_empty());
        assert!(!numeric.is_well_formed());
        assert!(!numeric.matches(Some(45)));
    }
}

#[test]
fn test_catch_all_condition() {
    let condition: Condition =
        serde_json::from_str(r#"{ "type": "direct", "questionId": "relocating" }"#).unwrap();
    assert_eq!(condition, Condition::catch_all("relocating"));

    let json = serde_json::to_value(&condition).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "direct", "questionId": "relocating" })
    );
}

#[test]
fn test_rule_defaults_to_direct() {
    let rule: GuidanceRule =
        serde_json::from_str(r#"{ "id": "r1", "questionId": "q1" }"#).unwrap();
    assert_eq!(rule.kind, RuleKind::Direct);
    assert!(rule.conditions.is_empty());
    assert!(rule.is_master());
}

#[test]
fn test_hr_permissions() {
    let company: CompanyAssignment = serde_json::from_str(
        r#"{ "id": "acme", "name": "Acme Corp", "tier": "pro", "maxUsers": 50,
             "hrManagers": [
                 { "email": "Admin@Acme.com", "permission": "admin" },
                 { "email": "viewer@acme.com", "name": "Viewer", "permission": "view" }
             ] }"#,
    )
    .unwrap();

    assert_eq!(
        company.permission_for("admin@acme.com"),
        Some(PermissionLevel::Admin)
    );
    assert!(company.can_edit_guidance("ADMIN@acme.com"));
    assert!(!company.can_edit_guidance("viewer@acme.com"));
    assert!(!company.can_edit_guidance("stranger@acme.com"));
}

#[test]
fn test_resource_tier_gate() {
    let resource: ExternalResource = serde_json::from_str(
        r#"{ "id": "lawyer", "name": "Employment lawyer", "tier": "pro" }"#,
    )
    .unwrap();

    assert!(!resource.available_to(SubscriptionTier::Basic));
    assert!(resource.available_to(SubscriptionTier::Pro));
}
