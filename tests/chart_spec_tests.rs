use approx::assert_relative_eq;
use survey_facets::core::{CellValue, ColumnId, Dataset, Distribution, FilteredView, distribute};
use survey_facets::error::FacetError;
use survey_facets::render::{
    ChartKind, ChartRenderer, Color, DEFAULT_PALETTE_COLORS, DEFAULT_PALETTE_TOKENS,
    DONUT_HOLE_RATIO, LegendOrientation, NullRenderer, Palette,
    to_count_spec, to_proportion_spec,
};

fn distribution_of(values: &[&str]) -> Distribution {
    let dataset = Dataset::new(
        vec![ColumnId::new("Answer")],
        values.iter().map(|value| vec![CellValue::from(*value)]).collect(),
    )
    .expect("dataset");
    distribute(&FilteredView::all(&dataset), "Answer").expect("distribute")
}

fn two_color_palette() -> Palette {
    Palette::from_hex_tokens(["#FF0000", "#0000FF"]).expect("palette")
}

#[test]
fn proportion_spec_carries_percentages_and_donut_metadata() {
    let distribution = distribution_of(&["Yes", "No", "Yes", "Yes"]);
    let spec = to_proportion_spec(&distribution, "Permanently Disabled", &Palette::default());

    assert_eq!(spec.kind, ChartKind::Proportion);
    assert_eq!(spec.title, "Permanently Disabled");
    assert_eq!(spec.total, 4);
    assert_eq!(spec.slices.len(), 2);
    assert_eq!(spec.slices[0].label, "Yes");
    assert_relative_eq!(spec.slices[0].value, 75.0);
    assert_relative_eq!(spec.slices[1].value, 25.0);

    let donut = spec.donut.expect("donut style");
    assert_relative_eq!(donut.hole_ratio, DONUT_HOLE_RATIO);
    assert_eq!(spec.legend.orientation, LegendOrientation::Horizontal);
    assert_relative_eq!(spec.legend.x, 0.5);
    assert_relative_eq!(spec.legend.y, -0.3);
}

#[test]
fn count_spec_carries_counts_and_one_legend_entry_per_category() {
    let distribution = distribution_of(&["Agree", "Disagree", "Agree", "Unsure"]);
    let spec = to_count_spec(&distribution, "Agreement", &Palette::default());

    assert_eq!(spec.kind, ChartKind::Count);
    assert!(spec.donut.is_none());
    let values: Vec<f64> = spec.slices.iter().map(|slice| slice.value).collect();
    assert_eq!(values, vec![2.0, 1.0, 1.0]);

    let legend: Vec<&str> = spec.legend_entries().map(|(label, _)| label).collect();
    assert_eq!(legend, vec!["Agree", "Disagree", "Unsure"]);
}

#[test]
fn palette_cycles_when_categories_outnumber_colors() {
    let distribution = distribution_of(&["a", "b", "c", "d", "e"]);
    let palette = two_color_palette();
    let spec = to_count_spec(&distribution, "Cycled", &palette);

    for (index, slice) in spec.slices.iter().enumerate() {
        assert_eq!(slice.color, palette.color_at(index % 2));
    }
    assert_eq!(spec.slices[4].color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn both_chart_kinds_agree_on_order_and_colors() {
    let distribution = distribution_of(&["x", "y", "z", "y"]);
    let palette = Palette::default();
    let donut = to_proportion_spec(&distribution, "Donut", &palette);
    let bars = to_count_spec(&distribution, "Bars", &palette);

    let donut_keys: Vec<_> = donut.legend_entries().collect();
    let bar_keys: Vec<_> = bars.legend_entries().collect();
    assert_eq!(donut_keys, bar_keys);
}

#[test]
fn empty_distribution_produces_empty_valid_spec() {
    let spec = to_proportion_spec(
        &Distribution::empty(ColumnId::new("Gender")),
        "Gender Distribution",
        &Palette::default(),
    );
    assert!(spec.is_empty());
    assert_eq!(spec.total, 0);

    let mut renderer = NullRenderer::default();
    renderer.render(&spec).expect("empty chart renders");
    assert_eq!(renderer.empty_charts, 1);
}

#[test]
fn palette_rejects_empty_and_malformed_tokens() {
    let err = Palette::from_hex_tokens(Vec::<&str>::new()).expect_err("empty palette");
    assert!(format!("{err}").contains("at least one color"));

    let err = Palette::from_hex_tokens(["#12345"]).expect_err("short token");
    assert!(matches!(err, FacetError::InvalidData(_)));

    let err = Palette::from_hex_tokens(["#GG0000"]).expect_err("non-hex token");
    assert!(format!("{err}").contains("not hexadecimal"));
}

#[test]
fn default_palette_is_the_stock_six_color_scheme() {
    let palette = Palette::default();
    assert_eq!(palette.len(), 6);
    assert_eq!(palette.colors()[0].to_hex(), "#1A85FF");
    assert_eq!(palette.color_at(6).to_hex(), "#1A85FF");
    assert_eq!(palette.colors()[5].to_hex(), "#666666");
}

#[test]
fn stock_colors_match_stock_hex_tokens() {
    let parsed = Palette::from_hex_tokens(DEFAULT_PALETTE_TOKENS).expect("stock tokens parse");
    assert_eq!(parsed, Palette::default());
    assert_eq!(parsed.colors(), DEFAULT_PALETTE_COLORS.as_slice());
    for (color, token) in DEFAULT_PALETTE_COLORS.iter().zip(DEFAULT_PALETTE_TOKENS) {
        assert_eq!(color.to_hex(), token);
    }
}

#[test]
fn color_hex_tokens_round_trip() {
    let color = Color::from_hex("#08366F").expect("color");
    assert_eq!(color.to_hex(), "#08366F");

    let translucent = Color::from_hex("ee317780").expect("color with alpha");
    assert_eq!(translucent.to_hex(), "#EE317780");
}

#[test]
fn null_renderer_rejects_inconsistent_specs() {
    let distribution = distribution_of(&["a", "b"]);
    let mut spec = to_proportion_spec(&distribution, "Broken", &Palette::default());
    spec.slices[0].value = 80.0;

    let mut renderer = NullRenderer::default();
    let err = renderer.render(&spec).expect_err("percentages off");
    assert!(format!("{err}").contains("percentages sum"));
    assert_eq!(renderer.rendered_charts, 0);
}
