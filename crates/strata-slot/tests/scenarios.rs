use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use strata_slot::{
    Child, Element, EventHandler, PropBag, SlotError, SlotEvent, SlotRequest, Style, compose_slot,
};

type Node = Element<u32>;

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> EventHandler {
    let log = Rc::clone(log);
    EventHandler::new(move |_| {
        log.borrow_mut().push(label);
        Ok(())
    })
}

#[test]
fn host_props_merge_onto_child_and_handlers_chain() -> Result<(), Box<dyn Error>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let host = PropBag::new()
        .class_name("mt-2")
        .on("onClick", recorder(&log, "h1"));
    let child = Node::new("a").with_props(
        PropBag::new()
            .class_name("text-sm")
            .on("onClick", recorder(&log, "h2")),
    );

    let merged = compose_slot(SlotRequest::new(host).element(child))?;
    assert_eq!(merged.props().get_class_name(), Some("text-sm mt-2"));

    let click = merged.props().handler("onClick").ok_or("onClick missing")?;
    click.call(&mut SlotEvent::new("click")).map_err(|err| err.to_string())?;
    assert_eq!(*log.borrow(), vec!["h2", "h1"]);
    Ok(())
}

#[test]
fn two_children_are_an_arity_violation() {
    let request = SlotRequest::new(PropBag::new())
        .element(Node::new("a"))
        .element(Node::new("span"));
    assert_eq!(compose_slot(request).err(), Some(SlotError::Arity { found: 2 }));
}

#[test]
fn nested_children_ride_along_untouched() -> Result<(), Box<dyn Error>> {
    let child = Node::new("a")
        .child(Child::Text("Docs".to_string()))
        .child(Child::Element(Node::new("svg")));
    let merged = compose_slot(
        SlotRequest::new(PropBag::new().style(Style::new().with("color", "red"))).element(child),
    )?;
    assert_eq!(merged.children().len(), 2);
    assert_eq!(
        merged.props().get_style().map(Style::to_css).as_deref(),
        Some("color: red")
    );
    Ok(())
}
