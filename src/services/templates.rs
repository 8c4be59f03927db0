//! SMS template loading and rendering
//!
//! Templates carry `{variable}` placeholders. A user-maintained
//! `~/.care-tui/templates.yaml` overrides the built-in set; anything missing
//! or unparseable falls back silently.

use crate::config::Config;
use crate::model::sms::SmsTemplate;
use regex::Regex;
use std::collections::HashMap;
use std::fs;

/// The stock template set.
pub fn builtin_templates() -> Vec<SmsTemplate> {
    vec![
        SmsTemplate {
            id: "repair-update".to_string(),
            name: "Repair Status Update".to_string(),
            content: "Dear {customerName}, your repair request #{repairId} has been updated to \
                      {status}. Technician: {technicianName}. For support call {supportNumber}."
                .to_string(),
            variables: vec![
                "customerName".to_string(),
                "repairId".to_string(),
                "status".to_string(),
                "technicianName".to_string(),
                "supportNumber".to_string(),
            ],
        },
        SmsTemplate {
            id: "appointment".to_string(),
            name: "Technician Appointment".to_string(),
            content: "Dear {customerName}, your technician {technicianName} will arrive on {date} \
                      between {timeSlot}. Reference: #{ticketId}"
                .to_string(),
            variables: vec![
                "customerName".to_string(),
                "technicianName".to_string(),
                "date".to_string(),
                "timeSlot".to_string(),
                "ticketId".to_string(),
            ],
        },
        SmsTemplate {
            id: "payment-reminder".to_string(),
            name: "Payment Reminder".to_string(),
            content: "Dear {customerName}, your payment of ${amount} for service #{serviceId} is \
                      due on {dueDate}. Please pay to avoid service interruption."
                .to_string(),
            variables: vec![
                "customerName".to_string(),
                "amount".to_string(),
                "serviceId".to_string(),
                "dueDate".to_string(),
            ],
        },
    ]
}

/// Templates in effect: the user file when present and well-formed, the
/// built-ins otherwise.
pub fn load_templates() -> Vec<SmsTemplate> {
    let path = match Config::config_dir() {
        Some(dir) => dir.join("templates.yaml"),
        None => return builtin_templates(),
    };

    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return builtin_templates(),
    };

    match serde_yaml::from_str::<Vec<SmsTemplate>>(&contents) {
        Ok(templates) if !templates.is_empty() => templates,
        _ => builtin_templates(),
    }
}

/// Substitute `{variable}` placeholders. Placeholders without a supplied
/// value are left verbatim so the gap is visible in the preview.
pub fn render(template: &SmsTemplate, values: &HashMap<String, String>) -> String {
    let re = match Regex::new(r"\{(\w+)\}") {
        Ok(re) => re,
        Err(_) => return template.content.clone(),
    };

    re.replace_all(&template.content, |caps: &regex::Captures| {
        match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_supplied_variables() {
        let template = &builtin_templates()[0];
        let mut values = HashMap::new();
        values.insert("customerName".to_string(), "John".to_string());
        values.insert("repairId".to_string(), "12345".to_string());
        values.insert("status".to_string(), "Complete".to_string());
        values.insert("technicianName".to_string(), "Mike".to_string());
        values.insert("supportNumber".to_string(), "1700".to_string());

        let message = render(template, &values);
        assert_eq!(
            message,
            "Dear John, your repair request #12345 has been updated to Complete. \
             Technician: Mike. For support call 1700."
        );
    }

    #[test]
    fn test_missing_variables_stay_verbatim() {
        let template = &builtin_templates()[1];
        let mut values = HashMap::new();
        values.insert("customerName".to_string(), "Amina".to_string());

        let message = render(template, &values);
        assert!(message.starts_with("Dear Amina, your technician {technicianName}"));
        assert!(message.contains("{date}"));
    }

    #[test]
    fn test_builtin_set() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].id, "repair-update");
        assert_eq!(templates[2].variables.len(), 4);
    }

    #[test]
    fn test_template_file_format_parses() {
        let yaml = "
- id: outage
  name: Outage Notice
  content: \"Service in {district} is down until {eta}.\"
  variables: [district, eta]
";
        let templates: Vec<SmsTemplate> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].variables, vec!["district", "eta"]);
    }
}
