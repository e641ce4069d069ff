use crate::config::{GENDER_QUESTION, GENDER_UNANSWERED};
use crate::countries::CountryTable;
use crate::types::{Attendee, Order};

/// Flatten paid orders into one attendee record per position, in input
/// iteration order. Unpaid orders contribute nothing; a position without a
/// gender answer gets the placeholder value.
pub fn extract_attendees(orders: &[Order], countries: &CountryTable) -> Vec<Attendee> {
    let mut attendees = Vec::new();

    for order in orders {
        if !order.is_paid() {
            continue;
        }

        let country = &order.invoice_address.country;

        for position in &order.positions {
            let gender = position
                .answers
                .iter()
                .find(|a| a.question == GENDER_QUESTION)
                .map(|a| a.answer.clone())
                .unwrap_or_else(|| GENDER_UNANSWERED.to_string());

            attendees.push(Attendee {
                order_code: order.code.clone(),
                status: order.status.clone(),
                country: country.clone(),
                item: position.item,
                gender,
                continent: countries.continent_of(country).to_string(),
            });
        }
    }

    attendees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Answer, InvoiceAddress, Position};

    fn make_order(code: &str, status: &str, country: &str, positions: Vec<Position>) -> Order {
        Order {
            code: code.to_string(),
            status: status.to_string(),
            invoice_address: InvoiceAddress {
                country: country.to_string(),
            },
            positions,
        }
    }

    fn position(item: u64, answers: Vec<Answer>) -> Position {
        Position { item, answers }
    }

    fn gender_answer(answer: &str) -> Answer {
        Answer {
            question: GENDER_QUESTION,
            answer: answer.to_string(),
        }
    }

    #[test]
    fn only_paid_orders_contribute_records() {
        let orders = vec![
            make_order(
                "PAID1",
                "p",
                "IT",
                vec![
                    position(10, vec![gender_answer("she/her")]),
                    position(11, vec![]),
                ],
            ),
            make_order("PEND1", "n", "DE", vec![position(10, vec![])]),
        ];

        let attendees = extract_attendees(&orders, &CountryTable::builtin());

        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].order_code, "PAID1");
        assert_eq!(attendees[0].gender, "she/her");
        assert_eq!(attendees[1].gender, GENDER_UNANSWERED);
    }

    #[test]
    fn other_question_answers_do_not_count_as_gender() {
        let orders = vec![make_order(
            "PAID1",
            "p",
            "IT",
            vec![position(
                10,
                vec![Answer {
                    question: 12,
                    answer: "vegetarian".to_string(),
                }],
            )],
        )];

        let attendees = extract_attendees(&orders, &CountryTable::builtin());

        assert_eq!(attendees[0].gender, GENDER_UNANSWERED);
    }

    #[test]
    fn continent_is_resolved_through_the_supplied_table() {
        let orders = vec![
            make_order("A", "p", "IT", vec![position(1, vec![])]),
            make_order("B", "p", "XX", vec![position(1, vec![])]),
        ];

        let attendees = extract_attendees(&orders, &CountryTable::builtin());

        assert_eq!(attendees[0].continent, "Europe");
        assert_eq!(attendees[1].continent, "Unknown");
    }

    #[test]
    fn records_follow_input_order_one_per_position() {
        let orders = vec![
            make_order(
                "A",
                "p",
                "IT",
                vec![position(1, vec![]), position(2, vec![])],
            ),
            make_order("B", "p", "FR", vec![position(3, vec![])]),
        ];

        let attendees = extract_attendees(&orders, &CountryTable::builtin());

        let items: Vec<u64> = attendees.iter().map(|a| a.item).collect();
        assert_eq!(items, [1, 2, 3]);
    }
}
