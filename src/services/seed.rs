//! Sample data generators
//!
//! There is no backend; every view starts from a generated collection, the
//! way the system this models shipped with mock arrays. Generation is
//! deterministic (index arithmetic, no RNG) so tests can pin the output.

use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::complaint::{Complaint, ComplaintStatus};
use crate::model::issue::{Issue, IssueStatus, CATEGORIES, DISTRICTS, TECHNICIANS};
use crate::model::repair::{DeviceType, RepairStatus, StbRepair};
use crate::model::sms::{SmsLog, SmsStatus};
use crate::model::task::{TaskStatus, TechTask};
use crate::model::user::{Role, User, DEPARTMENTS, DESIGNATIONS};
use crate::model::Priority;
use chrono::{NaiveDate, NaiveDateTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(h, min, s)
        .unwrap_or_default()
}

/// Two hand-written complaints plus thirty generated ones.
pub fn complaints() -> Vec<Complaint> {
    let mut records = vec![
        Complaint {
            id: "123456".to_string(),
            icno: "765432".to_string(),
            wrong_icno: "765433".to_string(),
            mobile: "2345678901".to_string(),
            user_name: "John Doe".to_string(),
            status: ComplaintStatus::Open,
            created_at: date(2023, 6, 1),
        },
        Complaint {
            id: "234567".to_string(),
            icno: "765432".to_string(),
            wrong_icno: "765433".to_string(),
            mobile: "2345678901".to_string(),
            user_name: "Alice Johnson".to_string(),
            status: ComplaintStatus::Resolved,
            created_at: date(2023, 6, 5),
        },
    ];

    let statuses = ComplaintStatus::all();
    for i in 0..30usize {
        records.push(Complaint {
            id: format!("{}", 300_000 + i),
            icno: format!("{}", 800_000 + i),
            wrong_icno: format!("{}", 800_001 + i),
            mobile: "2345678901".to_string(),
            user_name: format!("User {}", i + 1),
            status: statuses[i % 3],
            created_at: date(2023, 6, (i % 28) as u32 + 1),
        });
    }

    records
}

/// Fifty issues cycling through the category/priority/technician/district
/// vocabularies.
pub fn issues() -> Vec<Issue> {
    let statuses = IssueStatus::all();
    let priorities = Priority::all();

    (1..=50usize)
        .map(|i| Issue {
            id: format!("ISS{:03}", i),
            customer_name: format!("Customer {}", i),
            mobile: format!("061{:07}", 1_000_000 + (i * 53_171) % 9_000_000),
            description: format!("Sample issue description {}", i),
            category: CATEGORIES[i % 4].to_string(),
            priority: priorities[i % 3],
            technician: TECHNICIANS[i % TECHNICIANS.len()].to_string(),
            district: DISTRICTS[i % DISTRICTS.len()].to_string(),
            created_at: date(2024, 3, (i % 28) as u32 + 1),
            status: statuses[i % 4],
        })
        .collect()
}

pub fn repairs() -> Vec<StbRepair> {
    let customers = [
        "John Smith",
        "Maria Garcia",
        "Ahmed Hassan",
        "Li Wei",
        "Fatima Ali",
        "David Brown",
    ];
    let issues = [
        "No signal display",
        "Unit does not power on",
        "Smart card not detected",
        "HDMI output flickers",
        "Channels fail to decrypt",
        "Remote unresponsive",
    ];
    let statuses = RepairStatus::all();
    let priorities = Priority::all();
    let technicians = crate::model::repair::TECHNICIANS;

    (1..=12usize)
        .map(|i| StbRepair {
            id: format!("REP{:03}", i),
            device_id: format!("STB-2024-{:03}", i),
            customer_name: customers[i % customers.len()].to_string(),
            contact_number: format!("06120213{:02}", 80 + i),
            device_type: if i % 4 == 0 { DeviceType::Stp } else { DeviceType::Stb },
            issue: issues[i % issues.len()].to_string(),
            status: statuses[i % 3],
            priority: priorities[(i + 1) % 3],
            technician: technicians[i % technicians.len()].to_string(),
            created_at: date(2024, 2, (i % 28) as u32 + 1),
        })
        .collect()
}

/// The two starter tasks the board ships with when the store is empty.
pub fn tasks() -> Vec<TechTask> {
    vec![
        TechTask {
            id: "1".to_string(),
            technician: "John Doe".to_string(),
            description: "Install new cable box".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            due_date: date(2023, 6, 15),
        },
        TechTask {
            id: "2".to_string(),
            technician: "Jane Smith".to_string(),
            description: "Repair faulty connection".to_string(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            due_date: date(2023, 6, 16),
        },
    ]
}

pub fn sms_logs() -> Vec<SmsLog> {
    let recipients = [
        "+252615123456",
        "+252615234567",
        "+252615345678",
        "+252615456789",
    ];
    let templates = [
        "Repair Status Update",
        "Technician Appointment",
        "Payment Reminder",
    ];
    let statuses = [
        SmsStatus::Delivered,
        SmsStatus::Delivered,
        SmsStatus::Pending,
        SmsStatus::Failed,
    ];

    (1..=8usize)
        .map(|i| {
            let sent = datetime(2025, 2, 19, 10, 30, i as u32 * 7 % 60);
            let status = statuses[i % statuses.len()];
            SmsLog {
                id: format!("SMS{:03}", i),
                recipient: recipients[i % recipients.len()].to_string(),
                message: format!(
                    "Dear customer, your repair #{} has been updated. For support call 1700.",
                    12_340 + i
                ),
                template: templates[i % templates.len()].to_string(),
                status,
                sent_at: sent,
                delivered_at: match status {
                    SmsStatus::Delivered => sent.checked_add_signed(chrono::Duration::seconds(5)),
                    _ => None,
                },
            }
        })
        .collect()
}

/// The three campaigns the marketing log ships with.
pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "1".to_string(),
            name: "Summer Sale".to_string(),
            status: CampaignStatus::Active,
            sent_count: 5000,
            delivery_rate: 98.5,
            start_date: date(2023, 6, 1),
            end_date: date(2023, 6, 30),
            message: "Summer offers are live. Reply STOP to opt out.".to_string(),
            target_audience: "All subscribers".to_string(),
        },
        Campaign {
            id: "2".to_string(),
            name: "New Product Launch".to_string(),
            status: CampaignStatus::Scheduled,
            sent_count: 0,
            delivery_rate: 0.0,
            start_date: date(2023, 7, 1),
            end_date: date(2023, 7, 15),
            message: "A new set-top box arrives this month.".to_string(),
            target_audience: "Active customers".to_string(),
        },
        Campaign {
            id: "3".to_string(),
            name: "Customer Feedback".to_string(),
            status: CampaignStatus::Completed,
            sent_count: 10_000,
            delivery_rate: 99.1,
            start_date: date(2023, 5, 1),
            end_date: date(2023, 5, 31),
            message: "Tell us how we did this quarter.".to_string(),
            target_audience: "Recent repairs".to_string(),
        },
    ]
}

pub fn users() -> Vec<User> {
    (1..=40usize)
        .map(|i| User {
            id: format!("user-{}", i),
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            role: if i <= 20 { Role::Admin } else { Role::Employee },
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            designation: DESIGNATIONS[i % DESIGNATIONS.len()].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_sizes() {
        assert_eq!(complaints().len(), 32);
        assert_eq!(issues().len(), 50);
        assert_eq!(repairs().len(), 12);
        assert_eq!(tasks().len(), 2);
        assert_eq!(sms_logs().len(), 8);
        assert_eq!(campaigns().len(), 3);
        assert_eq!(users().len(), 40);
    }

    #[test]
    fn test_scheduled_campaigns_have_not_sent_anything() {
        for campaign in campaigns() {
            if campaign.status == CampaignStatus::Scheduled {
                assert_eq!(campaign.sent_count, 0);
                assert_eq!(campaign.delivery_rate, 0.0);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = issues();
        let b = issues();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.mobile, y.mobile);
            assert_eq!(x.status, y.status);
        }
    }

    #[test]
    fn test_complaint_status_distribution() {
        let records = complaints();
        assert_eq!(
            Complaint::count_with_status(&records, ComplaintStatus::Open),
            11
        );
        assert_eq!(
            Complaint::count_with_status(&records, ComplaintStatus::InProgress),
            10
        );
        assert_eq!(
            Complaint::count_with_status(&records, ComplaintStatus::Resolved),
            11
        );
    }

    #[test]
    fn test_delivered_logs_carry_delivery_time() {
        for log in sms_logs() {
            match log.status {
                SmsStatus::Delivered => assert!(log.delivered_at.is_some()),
                _ => assert!(log.delivered_at.is_none()),
            }
        }
    }
}
