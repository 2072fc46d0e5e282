//! ISO 10303-21 text carrying the configuration as comments and points.
//!
//! The output is a placeholder exchange file: product context, an origin
//! placement, and one `CARTESIAN_POINT` per placed component. It carries no
//! solid geometry.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use conveyor_entity::configuration::{OverheadConfig, RollerConfig};

use super::step_timestamp;

pub const STEP_CONTENT_TYPE: &str = "application/step";

/// A generated STEP document and its download name.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFile {
    pub file_name: &'static str,
    pub content: String,
}

const PRODUCT_CONTEXT: &str = "#1=APPLICATION_CONTEXT('automotive design');
#2=APPLICATION_PROTOCOL_DEFINITION('international standard','automotive_design',2000,#1);
#3=PRODUCT_CONTEXT('',#1,'mechanical');
";

const PRODUCT_DEFINITION: &str = "#5=PRODUCT_DEFINITION_FORMATION('','',#4);
#6=PRODUCT_DEFINITION_CONTEXT('part definition',#1,'design');
#7=PRODUCT_DEFINITION('design','',#5,#6);
";

const ORIGIN_PLACEMENT: &str = "#10=CARTESIAN_POINT('Origin',(0.0,0.0,0.0));
#11=DIRECTION('Z',(0.0,0.0,1.0));
#12=DIRECTION('X',(1.0,0.0,0.0));
#13=AXIS2_PLACEMENT_3D('',#10,#11,#12);
";

const FOOTER: &str = "\nENDSEC;\nEND-ISO-10303-21;";

fn header(out: &mut String, description: &str, file_name: &str, at: DateTime<Utc>) {
    let timestamp = step_timestamp(at);
    out.push_str("ISO-10303-21;\nHEADER;\n");
    let _ = writeln!(out, "FILE_DESCRIPTION(('{description}'),'2;1');");
    let _ = writeln!(
        out,
        "FILE_NAME('{file_name}','{timestamp}',('Conveyor Configurator'),('Industrial Design PoC'),'','','');"
    );
    out.push_str("FILE_SCHEMA(('AUTOMOTIVE_DESIGN'));\nENDSEC;\n\nDATA;\n");
}

/// Capitalised boolean as written in parameter comments.
fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub fn roller_step(config: &RollerConfig, at: DateTime<Utc>) -> StepFile {
    const FILE_NAME: &str = "conveyor.step";
    let rollers = config.roller_count();
    let mut out = String::new();

    header(&mut out, "Roller Conveyor Configuration", FILE_NAME, at);
    out.push_str("/* Conveyor Configuration Parameters */\n");
    let _ = writeln!(out, "/* Length: {} mm */", config.length);
    let _ = writeln!(out, "/* Width: {} mm */", config.width);
    let _ = writeln!(out, "/* Height: {} mm */", config.height);
    let _ = writeln!(out, "/* Roller Diameter: {} mm */", config.roller_diameter);
    let _ = writeln!(out, "/* Roller Spacing: {} mm */", config.roller_spacing);
    let _ = writeln!(out, "/* Number of Rollers: {rollers} */");
    let _ = writeln!(out, "/* Load Capacity: {} kg */", config.load_capacity);
    let _ = writeln!(out, "/* Drive Type: {} */", config.drive_type);
    out.push('\n');

    out.push_str(PRODUCT_CONTEXT);
    out.push_str(
        "#4=PRODUCT('RollerConveyor','Roller Conveyor Assembly','Configured conveyor system',(#3));\n",
    );
    out.push_str(PRODUCT_DEFINITION);
    out.push_str("\n/* Frame - Left Side */\n");
    out.push_str(ORIGIN_PLACEMENT);

    let half_width = config.width / 2.0;
    out.push_str("\n/* Frame dimensions */\n");
    let _ = writeln!(
        out,
        "#20=CARTESIAN_POINT('FrameStart',(0.0,{},{half_width}));",
        config.height
    );
    let _ = writeln!(
        out,
        "#21=CARTESIAN_POINT('FrameEnd',({},{},{half_width}));",
        config.length, config.height
    );

    out.push_str("\n/* Roller positions */\n");
    let spacing = config.roller_spacing;
    let y = config.height - config.roller_diameter / 2.0;
    for i in 0..rollers {
        let x = spacing / 2.0 + i as f64 * spacing;
        let _ = writeln!(out, "#{}=CARTESIAN_POINT('Roller{}',({x},{y},0.0));", 100 + i, i + 1);
    }
    out.push_str(FOOTER);

    StepFile {
        file_name: FILE_NAME,
        content: out,
    }
}

pub fn overhead_step(config: &OverheadConfig, at: DateTime<Utc>) -> StepFile {
    const FILE_NAME: &str = "overhead-conveyor.step";
    let height = config.height_from_floor;
    let mut out = String::new();

    header(&mut out, "Overhead Conveyor Configuration", FILE_NAME, at);
    out.push_str("/* Overhead Conveyor Configuration Parameters */\n");
    let _ = writeln!(out, "/* Track Length: {} mm */", config.track_length);
    let _ = writeln!(out, "/* Height from Floor: {height} mm */");
    let _ = writeln!(out, "/* Carrier Spacing: {} mm */", config.carrier_spacing);
    let _ = writeln!(out, "/* Load per Carrier: {} kg */", config.load_per_carrier);
    let _ = writeln!(out, "/* Number of Carriers: {} */", config.num_carriers);
    let _ = writeln!(out, "/* Include Curves: {} */", flag(config.include_curves));
    let _ = writeln!(out, "/* Curve Radius: {} mm */", config.curve_radius);
    let _ = writeln!(out, "/* Incline Angle: {} degrees */", config.incline_angle);
    let _ = writeln!(out, "/* Decline Angle: {} degrees */", config.decline_angle);
    let _ = writeln!(out, "/* Drive Units: {} */", config.drive_units);
    let _ = writeln!(out, "/* Total Load Capacity: {} kg */", config.total_load_capacity());
    out.push('\n');

    out.push_str(PRODUCT_CONTEXT);
    out.push_str(
        "#4=PRODUCT('OverheadConveyor','Overhead Conveyor Assembly','Configured overhead conveyor system',(#3));\n",
    );
    out.push_str(PRODUCT_DEFINITION);
    out.push_str("\n/* I-Beam Track Profile */\n");
    out.push_str("/* Width: 100mm, Height: 80mm, Flange: 8mm, Web: 6mm */\n");
    out.push_str(ORIGIN_PLACEMENT);

    out.push_str("\n/* Track start and end points */\n");
    let _ = writeln!(out, "#20=CARTESIAN_POINT('TrackStart',(0.0,{height},0.0));");
    let _ = writeln!(
        out,
        "#21=CARTESIAN_POINT('TrackEnd',({},{height},0.0));",
        config.track_length
    );

    out.push_str("\n/* Carrier positions */\n");
    let spacing = config.carrier_spacing;
    for i in 0..config.num_carriers.max(0) {
        let x = spacing / 2.0 + f64::from(i) * spacing;
        let _ = writeln!(out, "#{}=CARTESIAN_POINT('Carrier{}',({x},{height},0.0));", 100 + i, i + 1);
    }

    let drive_units = config.drive_units.max(0);
    for i in 0..drive_units {
        let x = if i == 0 {
            0.0
        } else {
            config.track_length * f64::from(i) / f64::from(drive_units)
        };
        let _ = writeln!(
            out,
            "#{}=CARTESIAN_POINT('DriveUnit{}',({x},{},0.0));",
            200 + i,
            i + 1,
            height + 150.0
        );
    }
    out.push_str(FOOTER);

    StepFile {
        file_name: FILE_NAME,
        content: out,
    }
}
