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

//! Static HL7 v2.x segment, field, and trigger-event dictionaries.
//!
//! These are pure lookup tables with no behavior: 3-letter segment codes to
//! segment names, (segment, field number) to field names, and ADT trigger
//! codes to event descriptions. Absence is the only "failure" mode; callers
//! supply their own fallback text (e.g. `Field 7`).
//!
//! Field names are tabled for the segments that dominate real-world ADT and
//! result messages (MSH, EVN, PID, PV1, NK1, OBR, OBX). Field numbers in
//! each table are contiguous from 1, so the tables are plain slices indexed
//! by `field - 1`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Segment code to segment name.
static SEGMENT_TABLE: &[(&str, &str)] = &[
    ("ABS", "Abstract"),
    ("ACC", "Accident"),
    ("ADD", "Addendum"),
    ("ADJ", "Adjustment"),
    ("AFF", "Professional Affiliation"),
    ("AIG", "Appointment Information - General Resource"),
    ("AIL", "Appointment Information - Location Resource"),
    ("AIP", "Appointment Information - Personnel Resource"),
    ("AIS", "Appointment Information - Service Resource"),
    ("AL1", "Patient Allergy Information"),
    ("APR", "Appointment Preferences"),
    ("ARQ", "Appointment Request"),
    ("ARV", "Access Restriction"),
    ("AUT", "Authorization Information"),
    ("BHS", "Batch Header"),
    ("BLC", "Blood Code"),
    ("BLG", "Billing"),
    ("BPO", "Blood Product Order"),
    ("BPX", "Blood Product Dispense Status"),
    ("BTX", "Blood Product Transfusion/Disposition"),
    ("BUI", "Blood Unit Information"),
    ("CDM", "Charge Description Master"),
    ("CDO", "Clinical Study with Phases and Schedules"),
    ("CER", "Certificate Detail"),
    ("CM0", "Clinical Study Master"),
    ("CM1", "Clinical Study Phase Master"),
    ("CM2", "Clinical Study Schedule Master"),
    ("CNS", "Clear Notification"),
    ("CON", "Consent Segment"),
    ("CSP", "Clinical Study Phase"),
    ("CSR", "Clinical Study Registration"),
    ("CSS", "Clinical Study Data Schedule Segment"),
    ("CTD", "Contact Data"),
    ("CTI", "Clinical Trial Identification"),
    ("DB1", "Disability"),
    ("DG1", "Diagnosis"),
    ("DMI", "DRG Master File Information"),
    ("DON", "Donation Segment"),
    ("DRG", "Diagnosis Related Group"),
    ("DSC", "Continuation Pointer"),
    ("DSP", "Display Data"),
    ("ECD", "Equipment Command"),
    ("ECR", "Equipment Command Response"),
    ("EDU", "Educational Detail"),
    ("EQP", "Equipment/log Service"),
    ("EQU", "Equipment Detail"),
    ("ERR", "Error"),
    ("EVN", "Event Type"),
    ("FAC", "Facility"),
    ("FHS", "File Header"),
    ("FT1", "Financial Transaction"),
    ("FTS", "File Trailer"),
    ("GOL", "Goal Detail"),
    ("GP1", "Grouping/Reimbursement - Visit"),
    ("GP2", "Grouping/Reimbursement - Procedure Line Item"),
    ("GT1", "Guarantor"),
    ("IAM", "Patient Adverse Reaction Information"),
    ("IAR", "Allergy Reaction"),
    ("IIM", "Inventory Item Master"),
    ("ILT", "Material Lot"),
    ("IN1", "Insurance"),
    ("IN2", "Insurance Additional Information"),
    ("IN3", "Insurance Additional Information, Certification"),
    ("INV", "Inventory Detail"),
    ("IPC", "Imaging Procedure Control Segment"),
    ("IPR", "Invoice Processing Results"),
    ("ISD", "Interaction Status Detail"),
    ("ITM", "Material Item"),
    ("IVC", "Invoice Segment"),
    ("IVT", "Material Location"),
    ("LAN", "Language Detail"),
    ("LCC", "Location Charge Code"),
    ("LCH", "Location Characteristic"),
    ("LDP", "Location Department"),
    ("LOC", "Location Identification"),
    ("LRL", "Location Relationship"),
    ("MFA", "Master File Acknowledgment"),
    ("MFE", "Master File Entry"),
    ("MFI", "Master File Identification"),
    ("MRG", "Merge Patient Information"),
    ("MSA", "Message Acknowledgment"),
    ("MSH", "Message Header"),
    ("NCK", "System Clock"),
    ("NDS", "Notification Detail"),
    ("NK1", "Next of Kin / Associated Parties"),
    ("NPU", "Bed Status Update"),
    ("NSC", "Application Status Change"),
    ("NST", "Application Control Level Statistics"),
    ("NTE", "Notes and Comments"),
    ("OBR", "Observation Request"),
    ("OBX", "Observation/Result"),
    ("ODS", "Dietary Orders, Supplements, and Preferences"),
    ("ODT", "Diet Tray Instructions"),
    ("OM1", "General Segment"),
    ("OM2", "Numeric Observation"),
    ("OM3", "Categorical Service/Test/Observation"),
    ("OM4", "Observations that Require Specimens"),
    ("OM5", "Observation Batteries (Sets)"),
    ("OM6", "Observations that are Calculated from Other Observations"),
    ("OM7", "Additional Basic Attributes"),
    ("ORC", "Common Order"),
    ("ORG", "Practitioner Organization Unit"),
    ("OVR", "Override Segment"),
    ("PAC", "Shipment Packaging"),
    ("PCE", "Patient Charge Cost Center Exceptions"),
    ("PCR", "Possible Causal Relationship"),
    ("PD1", "Patient Additional Demographic"),
    ("PDA", "Patient Death and Autopsy"),
    ("PDC", "Product Detail Country"),
    ("PEO", "Product Experience Observation"),
    ("PES", "Product Experience Sender"),
    ("PID", "Patient Identification"),
    ("PKG", "Item Packaging"),
    ("PMT", "Payment Information"),
    ("PR1", "Procedures"),
    ("PRA", "Practitioner Detail"),
    ("PRB", "Problem Details"),
    ("PRC", "Pricing"),
    ("PRD", "Provider Data"),
    ("PRT", "Participation Information"),
    ("PSG", "Product/Service Group"),
    ("PSH", "Product Summary Header"),
    ("PSL", "Product/Service Line Item"),
    ("PSS", "Product/Service Section"),
    ("PTH", "Pathway"),
    ("PV1", "Patient Visit"),
    ("PV2", "Patient Visit - Additional Information"),
    ("PYE", "Payee Information"),
    ("QAK", "Query Acknowledgment"),
    ("QID", "Query Identification"),
    ("QPD", "Query Parameter Definition"),
    ("QRD", "Original-Style Query Definition"),
    ("QRF", "Original style query filter"),
    ("QRI", "Query Response Instance"),
    ("RCP", "Response Control Parameter"),
    ("RDF", "Table Row Definition"),
    ("RDT", "Table Row Data"),
    ("REL", "Clinical Relationship Segment"),
    ("RF1", "Referral Information"),
    ("RFI", "Request for Information"),
    ("RGS", "Resource Group"),
    ("RMI", "Risk Management Incident"),
    ("ROL", "Role"),
    ("RQ1", "Requisition Detail-1"),
    ("RQD", "Requisition Detail"),
    ("RXA", "Pharmacy/Treatment Administration"),
    ("RXC", "Pharmacy/Treatment Component Order"),
    ("RXD", "Pharmacy/Treatment Dispense"),
    ("RXE", "Pharmacy/Treatment Encoded Order"),
    ("RXG", "Pharmacy/Treatment Give"),
    ("RXO", "Pharmacy/Treatment Order"),
    ("RXR", "Pharmacy/Treatment Route"),
    ("RXV", "Pharmacy/Treatment Infusion"),
    ("SAC", "Specimen Container detail"),
    ("SCH", "Scheduling Activity Information"),
    ("SCP", "Sterilizer Configuration"),
    ("SDD", "Sterilization Device Data"),
    ("SFT", "Software Segment"),
    ("SHP", "Shipment"),
    ("SID", "Substance Identifier"),
    ("SLT", "Sterilization Lot"),
    ("SPM", "Specimen"),
    ("SPS", "Specimen Source"),
    ("STF", "Staff Identification"),
    ("STZ", "Sterilization Parameter"),
    ("TCC", "Test Code Configuration"),
    ("TCD", "Test Code Detail"),
    ("TQ1", "Timing/Quantity"),
    ("TQ2", "Timing/Quantity Relationship"),
    ("TXA", "Transcription Document Header"),
    ("UB1", "UB82 Billing"),
    ("UB2", "UB92 Uniform Billing"),
    ("URD", "Results/Update Definition"),
    ("URS", "Results/Update Selection Criteria"),
    ("VAR", "Variance"),
    ("VND", "Purchasing Vendor"),
    ("ZXX", "User-defined Segment"),
];

/// MSH field names, MSH-1 through MSH-25.
static MSH_FIELDS: &[&str] = &[
    "Field Separator (always |)",
    "Encoding Characters",
    "Sending Application",
    "Sending Facility",
    "Receiving Application",
    "Receiving Facility",
    "Date/Time of Message",
    "Security",
    "Message Type",
    "Message Control ID",
    "Processing ID",
    "Version ID",
    "Sequence Number",
    "Continuation Pointer",
    "Accept Acknowledgment Type",
    "Application Acknowledgment Type",
    "Country Code",
    "Character Set",
    "Principal Language Of Message",
    "Alternate Character Set Handling Scheme",
    "Message Profile Identifier",
    "Sending Responsible Organization",
    "Receiving Responsible Organization",
    "Sending Network Address",
    "Receiving Network Address",
];

static EVN_FIELDS: &[&str] = &[
    "Event Type Code",
    "Recorded Date/Time",
    "Date/Time Planned Event",
    "Event Reason Code",
    "Operator ID",
    "Event Occurred",
    "Event Facility",
];

static PID_FIELDS: &[&str] = &[
    "Set ID - PID",
    "Patient ID",
    "Patient Identifier List",
    "Alternate Patient ID - PID",
    "Patient Name",
    "Mother's Maiden Name",
    "Date/Time of Birth",
    "Administrative Sex",
    "Patient Alias",
    "Race",
    "Patient Address",
    "County Code",
    "Phone Number - Home",
    "Phone Number - Business",
    "Primary Language",
    "Marital Status",
    "Religion",
    "Patient Account Number",
    "SSN Number - Patient",
    "Driver's License Number - Patient",
    "Mother's Identifier",
    "Ethnic Group",
    "Birth Place",
    "Multiple Birth Indicator",
    "Birth Order",
    "Citizenship",
    "Veterans Military Status",
    "Nationality",
    "Patient Death Date and Time",
    "Patient Death Indicator",
    "Identity Unknown Indicator",
    "Identity Reliability Code",
    "Last Update Date/Time",
    "Last Update Facility",
    "Taxonomic Classification Code",
    "Breed Code",
    "Strain",
    "Production Class Code",
    "Tribal Citizenship",
    "Patient Telecommunication Information",
];

static PV1_FIELDS: &[&str] = &[
    "Set ID - PV1",
    "Patient Class",
    "Assigned Patient Location",
    "Admission Type",
    "Preadmit Number",
    "Prior Patient Location",
    "Attending Doctor",
    "Referring Doctor",
    "Consulting Doctor",
    "Hospital Service",
    "Temporary Location",
    "Preadmit Test Indicator",
    "Re-admission Indicator",
    "Admit Source",
    "Ambulatory Status",
    "VIP Indicator",
    "Admitting Doctor",
    "Patient Type",
    "Visit Number",
    "Financial Class",
    "Charge Price Indicator",
    "Courtesy Code",
    "Credit Rating",
    "Contract Code",
    "Contract Effective Date",
    "Contract Amount",
    "Contract Period",
    "Interest Code",
    "Transfer to Bad Debt Code",
    "Transfer to Bad Debt Date",
    "Bad Debt Agency Code",
    "Bad Debt Transfer Amount",
    "Bad Debt Recovery Amount",
    "Delete Account Indicator",
    "Delete Account Date",
    "Discharge Disposition",
    "Discharged to Location",
    "Diet Type",
    "Servicing Facility",
    "Bed Status",
    "Account Status",
    "Pending Location",
    "Prior Temporary Location",
    "Admit Date/Time",
    "Discharge Date/Time",
    "Current Patient Balance",
    "Total Charges",
    "Total Adjustments",
    "Total Payments",
    "Alternate Visit ID",
    "Visit Indicator",
    "Other Healthcare Provider",
    "Service Episode Description",
    "Service Episode Identifier",
];

static NK1_FIELDS: &[&str] = &[
    "Set ID - NK1",
    "Name",
    "Relationship",
    "Address",
    "Phone Number",
    "Business Phone Number",
    "Contact Role",
    "Start Date",
    "End Date",
    "Next of Kin / Associated Parties Job Title",
    "Next of Kin / Associated Parties Job Code/Class",
    "Next of Kin / Associated Parties Employee Number",
    "Organization Name - NK1",
    "Marital Status",
    "Administrative Sex",
    "Date/Time of Birth",
    "Living Dependency",
    "Ambulatory Status",
    "Citizenship",
    "Primary Language",
    "Living Arrangement",
    "Publicity Code",
    "Protection Indicator",
    "Student Indicator",
    "Religion",
    "Mother's Maiden Name",
    "Nationality",
    "Ethnic Group",
    "Contact Reason",
    "Contact Person's Name",
    "Contact Person's Telephone Number",
    "Contact Person's Address",
    "Next of Kin/Associated Party's Identifiers",
    "Job Status",
    "Race",
    "Handicap",
    "Contact Person Social Security Number",
    "Next of Kin Birth Place",
    "VIP Indicator",
    "Next of Kin Telecommunication Information",
    "Contact Person's Telecommunication Information",
];

static OBR_FIELDS: &[&str] = &[
    "Set ID - OBR",
    "Placer Order Number",
    "Filler Order Number",
    "Universal Service Identifier",
    "Priority",
    "Requested Date/Time",
    "Observation Date/Time #",
    "Observation End Date/Time #",
    "Collection Volume *",
    "Collector Identifier *",
    "Specimen Action Code *",
    "Danger Code",
    "Relevant Clinical Information",
    "Specimen Received Date/Time",
    "Specimen Source",
    "Ordering Provider",
    "Order Callback Phone Number",
    "Placer Field 1",
    "Placer Field 2",
    "Filler Field 1 +",
    "Filler Field 2 +",
    "Results Rpt/Status Chng - Date/Time +",
    "Charge to Practice +",
    "Diagnostic Serv Sect ID",
    "Result Status +",
    "Parent Result +",
    "Quantity/Timing",
    "Result Copies To",
    "Parent Results Observation Identifier",
    "Transportation Mode",
    "Reason for Study",
    "Principal Result Interpreter +",
    "Assistant Result Interpreter +",
    "Technician +",
    "Transcriptionist +",
    "Scheduled Date/Time +",
    "Number of Sample Containers *",
    "Transport Logistics of Collected Sample *",
    "Collector's Comment *",
    "Transport Arrangement Responsibility",
    "Transport Arranged",
    "Escort Required",
    "Planned Patient Transport Comment",
    "Procedure Code",
    "Procedure Code Modifier",
    "Placer Supplemental Service Information",
    "Filler Supplemental Service Information",
    "Medically Necessary Duplicate Procedure Reason",
    "Result Handling",
    "Parent Universal Service Identifier",
    "Observation Group ID",
    "Parent Observation Group ID",
    "Alternate Placer Order Number",
    "Parent Order",
];

static OBX_FIELDS: &[&str] = &[
    "Set ID - OBX",
    "Value Type",
    "Observation Identifier",
    "Observation Sub-ID",
    "Observation Value",
    "Units",
    "References Range",
    "Interpretation Codes",
    "Probability",
    "Nature of Abnormal Test",
    "Observation Result Status",
    "Effective Date of Reference Range",
    "User Defined Access Checks",
    "Date/Time of the Observation",
    "Producer's ID",
    "Responsible Observer",
    "Observation Method",
    "Equipment Instance Identifier",
    "Date/Time of the Analysis",
    "Observation Site",
    "Observation Instance Identifier",
    "Mood Code",
    "Performing Organization Name",
    "Performing Organization Address",
    "Performing Organization Medical Director",
    "Patient Results Release Category",
    "Root Cause",
    "Local Process Control",
];

/// ADT trigger-event codes (MSH-9 second component) to event descriptions.
static ADT_EVENT_TABLE: &[(&str, &str)] = &[
    ("A01", "Admit/visit notification"),
    ("A02", "Transfer a patient"),
    ("A03", "Discharge/end visit"),
    ("A04", "Register a patient"),
    ("A05", "Pre-admit a patient"),
    ("A06", "Change an outpatient to an inpatient"),
    ("A07", "Change an inpatient to an outpatient"),
    ("A08", "Update patient information"),
    ("A09", "Patient departing - tracking"),
    ("A10", "Patient arriving - tracking"),
    ("A11", "Cancel admit/visit notification"),
    ("A12", "Cancel transfer"),
    ("A13", "Cancel discharge/end visit"),
    ("A14", "Pending admit"),
    ("A15", "Pending transfer"),
    ("A16", "Pending discharge"),
    ("A17", "Swap patients"),
    ("A18", "Merge patient information"),
    ("A19", "Patient query"),
    ("A20", "Bed status update"),
    ("A21", "Patient goes on a leave of absence"),
    ("A22", "Patient returns from a leave of absence"),
    ("A23", "Delete a patient record"),
    ("A24", "Link patient information"),
    ("A25", "Cancel pending discharge"),
    ("A26", "Cancel pending transfer"),
    ("A27", "Cancel pending admit"),
    ("A28", "Add person information"),
    ("A29", "Delete person information"),
    ("A30", "Merge person information"),
    ("A31", "Update person information"),
    ("A32", "Cancel patient arriving - tracking"),
    ("A33", "Cancel patient departing - tracking"),
    ("A34", "Merge patient information - patient ID only"),
    ("A35", "Merge patient information - account number only"),
    ("A36", "Merge patient information - patient ID and account number"),
    ("A37", "Unlink patient information"),
    ("A38", "Cancel pre-admit"),
    ("A39", "Merge person - patient ID"),
    ("A40", "Merge patient - patient identifier list"),
    ("A41", "Merge account - patient account number"),
    ("A42", "Merge visit - visit number"),
    ("A43", "Move patient information - patient identifier list"),
    ("A44", "Move account information - patient account number"),
    ("A45", "Move visit information - visit number"),
    ("A46", "Change patient ID"),
    ("A47", "Change patient identifier list"),
    ("A48", "Change alternate patient ID"),
    ("A49", "Change patient account number"),
    ("A50", "Change visit number"),
    ("A51", "Change alternate visit ID"),
    ("A52", "Cancel leave of absence for a patient"),
    ("A53", "Cancel patient returns from a leave of absence"),
    ("A54", "Change attending doctor"),
    ("A55", "Cancel change attending doctor"),
    ("A60", "Update allergy information"),
    ("A61", "Change consulting doctor"),
    ("A62", "Cancel change consulting doctor"),
];

static SEGMENTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SEGMENT_TABLE.iter().copied().collect());

static FIELDS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert("MSH", MSH_FIELDS);
    map.insert("EVN", EVN_FIELDS);
    map.insert("PID", PID_FIELDS);
    map.insert("PV1", PV1_FIELDS);
    map.insert("NK1", NK1_FIELDS);
    map.insert("OBR", OBR_FIELDS);
    map.insert("OBX", OBX_FIELDS);
    map
});

static ADT_EVENTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ADT_EVENT_TABLE.iter().copied().collect());

/// Look up the name of a segment by its 3-letter code.
pub fn segment_description(code: &str) -> Option<&'static str> {
    SEGMENTS.get(code).copied()
}

/// Look up the name of a field by segment code and 1-based field number.
pub fn field_description(code: &str, field: usize) -> Option<&'static str> {
    if field == 0 {
        return None;
    }
    FIELDS.get(code).and_then(|names| names.get(field - 1)).copied()
}

/// Look up the description of an ADT trigger-event code (e.g. `A01`).
pub fn event_description(trigger: &str) -> Option<&'static str> {
    ADT_EVENTS.get(trigger).copied()
}
