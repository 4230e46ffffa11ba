#[cfg(test)]
mod tests {
    use crate::fields::{Actor, Details, HpStatus, Side};
    use crate::{FeedEvent, parse_event};

    #[test]
    fn test_parse_side_tokens() {
        assert_eq!(Side::parse("p1a"), Some(Side::Player));
        assert_eq!(Side::parse("p2a"), Some(Side::Enemy));
        assert_eq!(Side::parse("p1"), Some(Side::Player));
        assert_eq!(Side::parse("p3a"), None);
        assert_eq!(Side::parse(""), None);
    }

    #[test]
    fn test_side_opposite_and_index() {
        assert_eq!(Side::Player.opposite(), Side::Enemy);
        assert_eq!(Side::Enemy.opposite(), Side::Player);
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Enemy.index(), 1);
    }

    #[test]
    fn test_parse_actor() {
        let actor = Actor::parse("p1a: Alakazam").unwrap();
        assert_eq!(actor.side, Side::Player);
        assert_eq!(actor.position, Some('a'));
        assert_eq!(actor.name, "Alakazam");

        assert!(Actor::parse("not an actor").is_none());
    }

    #[test]
    fn test_parse_details() {
        let details = Details::parse("Alakazam, L100");
        assert_eq!(details.species, "Alakazam");
        assert_eq!(details.level, Some(100));
        assert!(!details.shiny);

        let bare = Details::parse("Snorlax");
        assert_eq!(bare.species, "Snorlax");
        assert_eq!(bare.level, None);
    }

    #[test]
    fn test_parse_hp_status() {
        let hp = HpStatus::parse("270/323").unwrap();
        assert_eq!(hp.current, 270);
        assert_eq!(hp.max, Some(323));
        assert!(hp.status.is_none());

        let hp = HpStatus::parse("50/100 slp").unwrap();
        assert_eq!(hp.status.as_deref(), Some("slp"));

        let fnt = HpStatus::parse("0 fnt").unwrap();
        assert_eq!(fnt.current, 0);
        assert_eq!(fnt.max, None);
        assert!(fnt.is_faint());
    }

    #[test]
    fn test_parse_move_event() {
        let event = parse_event("|move|p1a: Alakazam|Psychic|p2a: Snorlax").unwrap();
        match event {
            FeedEvent::Move { actor, move_name } => {
                assert_eq!(actor.side, Side::Player);
                assert_eq!(move_name, "Psychic");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_damage_with_from_annotation() {
        let event = parse_event("|-damage|p2a: Snorlax|88/100|[from] confusion").unwrap();
        match event {
            FeedEvent::Damage { target, hp, from } => {
                assert_eq!(target.side, Side::Enemy);
                assert_eq!(hp.unwrap().current, 88);
                assert_eq!(from.as_deref(), Some("confusion"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_damage_faint() {
        let event = parse_event("|-damage|p1a: Alakazam|0 fnt").unwrap();
        match event {
            FeedEvent::Damage { hp, from, .. } => {
                assert!(hp.unwrap().is_faint());
                assert!(from.is_none());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_switch_event() {
        let event = parse_event("|switch|p1a: Alakazam|Alakazam, L100|100/100").unwrap();
        match event {
            FeedEvent::Switch { actor, details, hp } => {
                assert_eq!(actor.name, "Alakazam");
                assert_eq!(details.level, Some(100));
                assert_eq!(hp.unwrap().max, Some(100));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_turn_event() {
        assert_eq!(parse_event("|turn|7").unwrap(), FeedEvent::Turn(7));
        assert!(parse_event("|turn|seven").is_err());
    }

    #[test]
    fn test_parse_cant_event() {
        let event = parse_event("|cant|p2a: Snorlax|par").unwrap();
        match event {
            FeedEvent::Cant { actor, reason } => {
                assert_eq!(actor.side, Side::Enemy);
                assert_eq!(reason, "par");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_request_event() {
        let line = r#"|request|{"rqid":3,"side":{"name":"Red","id":"p1","pokemon":[{"ident":"p1: Alakazam","details":"Alakazam, L100","condition":"270/323","active":true}]}}"#;
        let event = parse_event(line).unwrap();
        match event {
            FeedEvent::Request(request) => {
                let side = request.side.as_ref().unwrap();
                assert_eq!(side.side(), Some(Side::Player));
                let active = request.active_mon().unwrap();
                assert_eq!(active.hp(), Some((270, 323)));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_request_bad_payload() {
        assert!(parse_event("|request|{not json").is_err());
    }

    #[test]
    fn test_unknown_tag_is_raw() {
        let event = parse_event("|j|someuser").unwrap();
        assert_eq!(event, FeedEvent::Raw("|j|someuser".to_string()));
    }

    #[test]
    fn test_free_text_is_raw() {
        let event = parse_event("Alakazam hurt itself in its confusion!").unwrap();
        assert!(matches!(event, FeedEvent::Raw(_)));
    }
}
