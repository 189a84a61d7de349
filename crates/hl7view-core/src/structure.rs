// hl7view - HL7 v2.x message inspector
//
// Copyright (c) 2025 hl7view contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Builds the annotated node tree from segment records.
//!
//! Duplicate segments are numbered `#1`, `#2`, ... in first-seen order,
//! but only when a code occurs more than once in the message. Descriptions
//! come from the static dictionary, with positional fallbacks
//! (`Unknown Segment (XXX)`, `Field k`, `Component j`, `Subcomponent m`).

use crate::dictionary;
use crate::message::{Component, Field, Segment};
use crate::node::{Node, NodeKind};
use std::collections::HashMap;

/// Build the tree, or `None` for an empty segment list.
pub(crate) fn build(segments: &[Segment]) -> Option<Node> {
    if segments.is_empty() {
        return None;
    }

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for seg in segments {
        *totals.entry(seg.code.as_str()).or_insert(0) += 1;
    }

    let mut root = Node::new(NodeKind::Message, "Message", "", "", "HL7 Message");
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for seg in segments {
        let ordinal = {
            let count = seen.entry(seg.code.as_str()).or_insert(0);
            *count += 1;
            *count
        };
        let display = if totals[seg.code.as_str()] > 1 {
            format!("{} #{}", seg.code, ordinal)
        } else {
            seg.code.clone()
        };
        root.push(segment_node(seg, display));
    }
    Some(root)
}

fn segment_node(seg: &Segment, display: String) -> Node {
    let description = dictionary::segment_description(&seg.code)
        .map(String::from)
        .unwrap_or_else(|| format!("Unknown Segment ({})", seg.code));

    let mut node = Node::new(
        NodeKind::Segment,
        display,
        seg.code.clone(),
        seg.line.clone(),
        description,
    );
    for (idx, field) in seg.fields.iter().enumerate() {
        node.push(field_node(&seg.code, idx + 1, field));
    }
    node
}

fn field_node(code: &str, number: usize, field: &Field) -> Node {
    let name = format!("{}-{}", code, number);
    let mut description = dictionary::field_description(code, number)
        .map(String::from)
        .unwrap_or_else(|| format!("Field {}", number));

    // MSH-9 carries the message type; for ADT messages the trigger event
    // is appended to the field description, not substituted for it.
    if code == "MSH" && number == 9 {
        if let Some(event) = trigger_event(field) {
            description.push_str(" - ");
            description.push_str(event);
        }
    }

    let mut node = Node::new(
        NodeKind::Field,
        name.clone(),
        number.to_string(),
        field.value.clone(),
        description,
    );
    for (idx, component) in field.components.iter().enumerate() {
        node.push(component_node(&name, idx + 1, component));
    }
    node
}

/// ADT trigger-event description from an MSH-9 field like `ADT^A01`.
fn trigger_event(field: &Field) -> Option<&'static str> {
    if field.component(1)?.value != "ADT" {
        return None;
    }
    dictionary::event_description(&field.component(2)?.value)
}

fn component_node(field_name: &str, number: usize, component: &Component) -> Node {
    let name = format!("{}.{}", field_name, number);
    let mut node = Node::new(
        NodeKind::Component,
        name.clone(),
        number.to_string(),
        component.value.clone(),
        format!("Component {}", number),
    );
    // The first subcomponent repeats the component's leading text, so
    // children start at subcomponent 2.
    for (idx, sub) in component.subcomponents.iter().enumerate().skip(1) {
        node.push(Node::new(
            NodeKind::Subcomponent,
            format!("{}.{}", name, idx + 1),
            (idx + 1).to_string(),
            sub.clone(),
            format!("Subcomponent {}", idx + 1),
        ));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn tree(text: &str) -> Node {
        build(&parse(text)).expect("non-empty message")
    }

    #[test]
    fn test_empty_segments_yield_none() {
        assert!(build(&[]).is_none());
    }

    #[test]
    fn test_root_node_shape() {
        let root = tree("PID|1");
        assert_eq!(root.kind, NodeKind::Message);
        assert_eq!(root.name, "Message");
        assert_eq!(root.raw_name, "");
        assert_eq!(root.value, "");
        assert_eq!(root.description, "HL7 Message");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_lone_segment_not_numbered() {
        let root = tree("PID|1\nOBX|1");
        assert_eq!(root.children[0].name, "PID");
        assert_eq!(root.children[1].name, "OBX");
    }

    #[test]
    fn test_duplicate_segments_numbered() {
        let root = tree("PID|1\nOBX|1\nOBX|2\nOBX|3");
        let names: Vec<&str> = root.children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["PID", "OBX #1", "OBX #2", "OBX #3"]);
    }

    #[test]
    fn test_raw_name_never_carries_suffix() {
        let root = tree("OBX|1\nOBX|2");
        assert_eq!(root.children[0].name, "OBX #1");
        assert_eq!(root.children[0].raw_name, "OBX");
        assert_eq!(root.children[1].raw_name, "OBX");
    }

    #[test]
    fn test_segment_description_lookup() {
        let root = tree("PID|1");
        assert_eq!(root.children[0].description, "Patient Identification");
    }

    #[test]
    fn test_unknown_segment_fallback() {
        let root = tree("ZAB|1");
        assert_eq!(root.children[0].description, "Unknown Segment (ZAB)");
    }

    #[test]
    fn test_degenerate_segment_fallback() {
        let root = tree("AB");
        assert_eq!(root.children[0].name, "???");
        assert_eq!(root.children[0].description, "Unknown Segment (???)");
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_segment_value_is_whole_line() {
        let root = tree("PID|1||12345");
        assert_eq!(root.children[0].value, "PID|1||12345");
    }

    #[test]
    fn test_field_names_and_descriptions() {
        let root = tree("PID|1||12345");
        let pid = &root.children[0];
        assert_eq!(pid.children[0].name, "PID-1");
        assert_eq!(pid.children[0].description, "Set ID - PID");
        assert_eq!(pid.children[2].name, "PID-3");
        assert_eq!(pid.children[2].description, "Patient Identifier List");
    }

    #[test]
    fn test_field_fallback_description() {
        // DG1 has no field table.
        let root = tree("DG1|1|X");
        let dg1 = &root.children[0];
        assert_eq!(dg1.children[0].description, "Field 1");
        assert_eq!(dg1.children[1].description, "Field 2");
    }

    #[test]
    fn test_msh_separator_field() {
        let root = tree("MSH|^~\\&|APP|FAC");
        let msh = &root.children[0];
        assert_eq!(msh.children[0].name, "MSH-1");
        assert_eq!(msh.children[0].value, "|");
        assert_eq!(msh.children[0].description, "Field Separator (always |)");
        assert_eq!(msh.children[1].name, "MSH-2");
        assert_eq!(msh.children[1].value, "^~\\&");
    }

    #[test]
    fn test_msh9_adt_trigger_annotation() {
        let root = tree("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ADT^A01|CTRL|P|2.5");
        let msh = &root.children[0];
        let msh9 = &msh.children[8];
        assert_eq!(msh9.name, "MSH-9");
        assert_eq!(msh9.description, "Message Type - Admit/visit notification");
    }

    #[test]
    fn test_msh9_non_adt_not_annotated() {
        let root = tree("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ORU^R01|CTRL|P|2.5");
        let msh9 = &root.children[0].children[8];
        assert_eq!(msh9.description, "Message Type");
    }

    #[test]
    fn test_msh9_unknown_trigger_not_annotated() {
        let root = tree("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ADT^A99|CTRL|P|2.5");
        let msh9 = &root.children[0].children[8];
        assert_eq!(msh9.description, "Message Type");
    }

    #[test]
    fn test_msh9_without_caret_not_annotated() {
        let root = tree("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ADT|CTRL|P|2.5");
        let msh9 = &root.children[0].children[8];
        assert_eq!(msh9.description, "Message Type");
    }

    #[test]
    fn test_component_nodes() {
        let root = tree("PID|AAA^BBB&CCC^DDD");
        let field = &root.children[0].children[0];
        assert_eq!(field.children.len(), 3);

        let first = &field.children[0];
        assert_eq!(first.name, "PID-1.1");
        assert_eq!(first.raw_name, "1");
        assert_eq!(first.value, "AAA");
        assert_eq!(first.description, "Component 1");
        assert!(first.is_leaf());
    }

    #[test]
    fn test_subcomponent_children_start_at_two() {
        let root = tree("PID|AAA^BBB&CCC^DDD");
        let second = &root.children[0].children[0].children[1];
        assert_eq!(second.value, "BBB&CCC");
        // "BBB" stays implicit in the component value; only "CCC" becomes
        // an explicit child, numbered 2.
        assert_eq!(second.children.len(), 1);
        assert_eq!(second.children[0].kind, NodeKind::Subcomponent);
        assert_eq!(second.children[0].name, "PID-1.2.2");
        assert_eq!(second.children[0].raw_name, "2");
        assert_eq!(second.children[0].value, "CCC");
        assert_eq!(second.children[0].description, "Subcomponent 2");
    }

    #[test]
    fn test_three_subcomponents_yield_two_children() {
        let root = tree("PID|A&B&C");
        // No caret: single component, nothing split.
        assert!(root.children[0].children[0].children[0].is_leaf());

        let root = tree("PID|X^A&B&C");
        let comp = &root.children[0].children[0].children[1];
        assert_eq!(comp.children.len(), 2);
        assert_eq!(comp.children[0].value, "B");
        assert_eq!(comp.children[0].name, "PID-1.2.2");
        assert_eq!(comp.children[1].value, "C");
        assert_eq!(comp.children[1].name, "PID-1.2.3");
    }

    #[test]
    fn test_kinds_by_depth() {
        let root = tree("PID|A^B&C");
        assert_eq!(root.kind, NodeKind::Message);
        let seg = &root.children[0];
        assert_eq!(seg.kind, NodeKind::Segment);
        let field = &seg.children[0];
        assert_eq!(field.kind, NodeKind::Field);
        let comp = &field.children[1];
        assert_eq!(comp.kind, NodeKind::Component);
        assert_eq!(comp.children[0].kind, NodeKind::Subcomponent);
    }

    #[test]
    fn test_build_is_idempotent() {
        let segments = parse("MSH|^~\\&|APP|FAC|RAPP|RFAC|20240101||ADT^A01|CTRL|P|2.5\nPID|1\nOBX|1\nOBX|2");
        let a = build(&segments).unwrap();
        let b = build(&segments).unwrap();
        assert_eq!(a, b);
    }
}
