use trellis::{
    Alignment, Block, FixedSizer, Flow, Insets, Layoutable, Precision, PrecisionData,
    ReflowSizer, Size,
};

fn label(id: &str, width: f64) -> Block {
    Block::new(id)
        .with_sizer(FixedSizer::preferred(Size::new(width, 18.0)))
        .with_data(PrecisionData::new().align(Alignment::End, Alignment::Middle))
}

fn field(id: &str) -> Block {
    Block::new(id)
        .with_sizer(FixedSizer::new(
            Size::new(40.0, 22.0),
            Size::new(160.0, 22.0),
            Size::new(10_000.0, 22.0),
        ))
        .with_data(PrecisionData::new().fill_horizontal())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let buttons = Block::new("buttons")
        .with_layout(Flow::new(6.0, 6.0))
        .with_data(PrecisionData::new().span(2, 1).align(Alignment::End, Alignment::Middle))
        .with_child(Block::new("cancel").with_sizer(FixedSizer::preferred(Size::new(80.0, 26.0))))
        .with_child(Block::new("save").with_sizer(FixedSizer::preferred(Size::new(80.0, 26.0))));

    let mut form = Block::new("form")
        .with_layout(Precision::new(2).spacing(8.0, 6.0))
        .with_insets(Insets::uniform(12.0))
        .with_child(label("name_label", 70.0))
        .with_child(field("name"))
        .with_child(label("email_label", 70.0))
        .with_child(field("email"))
        .with_child(label("notes_label", 70.0).with_data(
            PrecisionData::new().align(Alignment::End, Alignment::Beginning),
        ))
        .with_child(
            Block::new("notes")
                .with_sizer(ReflowSizer::new(420, 7.0, 15.0))
                .with_data(PrecisionData::new().fill_horizontal().fill_vertical()),
        )
        .with_child(buttons);

    let sizes = form.compute_sizes(trellis::NO_HINT_SIZE);
    println!("form sizes: {}", serde_json::to_string(&sizes)?);

    for width in [360.0, 520.0] {
        form.resize_to(Size::new(width, 320.0));
        println!("--- {width} x 320");
        for placement in form.placements() {
            let r = placement.absolute;
            println!(
                "{:<12} x={:>6.1} y={:>6.1} w={:>6.1} h={:>6.1}",
                placement.id,
                r.x0,
                r.y0,
                r.width(),
                r.height()
            );
        }
    }
    Ok(())
}
