//! Default designation-code rule table.
//!
//! Order matters: a family rule pre-empts every later rule whose code shares
//! its prefix, so specific codes are listed ahead of their family.

use super::{Action, CodePattern, Rule};
use crate::models::FeatureClass;

const fn exact(code: &'static str, tags: super::TagPairs) -> Rule {
    Rule::exact(code, tags)
}

const fn family(prefix: &'static str, tags: super::TagPairs) -> Rule {
    Rule::family(prefix, tags)
}

pub static DEFAULT_RULES: &[Rule] = &[
    // Administrative regions
    Rule::new(CodePattern::Family("ADM1"), Action::AdminRegion),
    // Populated places
    Rule::new(CodePattern::Exact("PPLC"), Action::AlreadyTagged),
    exact("PPLA", &[("place", "city")]),
    exact("PPLG", &[("place", "city")]),
    exact("PPLA2", &[("place", "town")]),
    exact("PPLA3", &[("place", "town")]),
    exact("PPLA4", &[("place", "town")]),
    exact("PPLX", &[("place", "suburb")]),
    exact("PPLL", &[("place", "hamlet")]),
    exact("PPLF", &[("place", "hamlet")]),
    exact("PPLR", &[("place", "hamlet")]),
    exact("PPLS", &[("place", "village")]),
    exact("PPLQ", &[("place", "locality"), ("abandoned", "yes")]),
    exact("PPLW", &[("place", "locality"), ("historic", "destroyed")]),
    exact("PPLH", &[("place", "locality"), ("historic", "yes")]),
    family("PPL", &[("place", "village")]),
    exact("STLMT", &[("place", "hamlet")]),
    exact("CMPRF", &[("place", "hamlet")]),
    exact("FRM", &[("place", "farm")]),
    exact("FRMS", &[("place", "farm")]),
    exact("FRMT", &[("place", "farm")]),
    exact("RNCH", &[("landuse", "meadow"), ("produce", "cattle")]),
    // Estates; ESTY is an estate for spot features and an estuary otherwise
    Rule::new(
        CodePattern::Exact("ESTY"),
        Action::ByClass {
            class: FeatureClass::Spot,
            matched: &[("landuse", "farm")],
            otherwise: &[("waterway", "river")],
        },
    ),
    exact("ESTB", &[("landuse", "farm"), ("produce", "bananas")]),
    exact("ESTC", &[("landuse", "farm"), ("produce", "cotton")]),
    exact("ESTO", &[("landuse", "farm"), ("produce", "palm_oil")]),
    exact("ESTR", &[("landuse", "farm"), ("produce", "rubber")]),
    exact("ESTSG", &[("landuse", "farm"), ("produce", "sugarcane")]),
    exact("ESTT", &[("landuse", "farm"), ("produce", "tea")]),
    family("EST", &[("landuse", "farm")]),
    // Undersea
    exact("SMU", &[("subsea", "seamount")]),
    exact("SMSU", &[("subsea", "seamounts")]),
    exact("TRNU", &[("subsea", "trench")]),
    exact("TRGU", &[("subsea", "trough")]),
    exact("RDGU", &[("subsea", "ridge")]),
    exact("RDSU", &[("subsea", "ridges")]),
    exact("BNKU", &[("subsea", "bank")]),
    exact("BNKSU", &[("subsea", "banks")]),
    exact("RFU", &[("natural", "reef"), ("subsea", "reef")]),
    exact("CNYU", &[("subsea", "canyon")]),
    exact("CNSU", &[("subsea", "canyons")]),
    exact("SHFU", &[("subsea", "shelf")]),
    exact("SLPU", &[("subsea", "slope")]),
    exact("BSNU", &[("subsea", "basin")]),
    exact("KNLU", &[("subsea", "knoll")]),
    exact("KNSU", &[("subsea", "knolls")]),
    exact("PLTU", &[("subsea", "plateau")]),
    exact("HLLU", &[("subsea", "hill")]),
    exact("HLSU", &[("subsea", "hills")]),
    exact("VALU", &[("subsea", "valley")]),
    exact("GAPU", &[("subsea", "gap")]),
    exact("SDLU", &[("subsea", "saddle")]),
    exact("SPRU", &[("subsea", "spur")]),
    exact("PKU", &[("subsea", "peak")]),
    exact("PKSU", &[("subsea", "peaks")]),
    exact("RISU", &[("subsea", "rise")]),
    exact("FRZU", &[("subsea", "fracture_zone")]),
    exact("PLNU", &[("subsea", "plain")]),
    exact("APNU", &[("subsea", "apron")]),
    exact("MTU", &[("subsea", "mountain")]),
    exact("FANU", &[("subsea", "fan")]),
    exact("HOLU", &[("subsea", "hole")]),
    exact("ESCU", &[("subsea", "escarpment")]),
    exact("MOTU", &[("subsea", "moat")]),
    exact("SCNU", &[("subsea", "seachannel")]),
    exact("TERU", &[("subsea", "terrace")]),
    exact("SILU", &[("subsea", "sill")]),
    exact("TNGU", &[("subsea", "tongue")]),
    exact("SHSU", &[("subsea", "shoals")]),
    exact("SHLU", &[("subsea", "shoal")]),
    // Hydrographic
    exact("OCN", &[("place", "ocean")]),
    exact("SEA", &[("place", "sea")]),
    exact("BAY", &[("natural", "bay")]),
    exact("BAYS", &[("natural", "bay")]),
    exact("COVE", &[("natural", "bay")]),
    exact("GULF", &[("natural", "bay")]),
    exact("INLT", &[("natural", "bay")]),
    exact("INLTQ", &[("natural", "bay")]),
    exact("SD", &[("natural", "bay")]),
    exact("STRT", &[("natural", "strait")]),
    exact("NRWS", &[("natural", "strait")]),
    family("CHN", &[("natural", "strait")]),
    exact("HBR", &[("landuse", "harbour")]),
    exact("ANCH", &[("landuse", "harbour"), ("seamark:type", "anchorage")]),
    exact("LGN", &[("natural", "water"), ("water", "lagoon")]),
    exact("LGNS", &[("natural", "water"), ("water", "lagoon")]),
    exact("LKC", &[("natural", "water"), ("geomorphology", "crater_lake")]),
    exact("LKI", &[("natural", "water"), ("intermittent", "yes")]),
    exact("LKN", &[("natural", "water"), ("water", "salt_lake")]),
    exact("LKO", &[("natural", "water"), ("water", "oxbow")]),
    family("LK", &[("natural", "water")]),
    exact("RSVT", &[("man_made", "storage_tank")]),
    exact("RSVI", &[("landuse", "reservoir"), ("intermittent", "yes")]),
    family("RSV", &[("landuse", "reservoir")]),
    exact("PNDSF", &[("landuse", "aquaculture")]),
    exact("PNDSN", &[("landuse", "salt_pond")]),
    exact("PNDI", &[("natural", "water"), ("intermittent", "yes")]),
    family("PND", &[("natural", "water")]),
    exact("STMC", &[("waterway", "canal")]),
    exact("STMH", &[("natural", "spring")]),
    exact("STMI", &[("waterway", "river"), ("intermittent", "yes")]),
    exact("STMIX", &[("waterway", "river"), ("intermittent", "yes")]),
    family("STM", &[("waterway", "river")]),
    exact("CRKT", &[("waterway", "river")]),
    exact("RCH", &[("waterway", "river")]),
    exact("CNLD", &[("waterway", "drain")]),
    exact("CNLA", &[("waterway", "canal"), ("bridge", "aqueduct")]),
    exact("CNLQ", &[("waterway", "canal"), ("disused", "yes")]),
    family("CNL", &[("waterway", "canal")]),
    exact("DTCHD", &[("waterway", "drain")]),
    family("DTCH", &[("waterway", "ditch")]),
    exact("FLLS", &[("waterway", "waterfall")]),
    exact("FLLSX", &[("waterway", "waterfall")]),
    exact("RPDS", &[("waterway", "rapids")]),
    exact("SPNT", &[("natural", "hot_spring")]),
    family("SPN", &[("natural", "spring")]),
    exact("GYSR", &[("natural", "geyser")]),
    family("WLL", &[("man_made", "water_well")]),
    exact("WTRH", &[("natural", "water")]),
    exact("SWMP", &[("natural", "wetland"), ("wetland", "swamp")]),
    exact("MRSH", &[("natural", "wetland"), ("wetland", "marsh")]),
    exact("MRSHN", &[("natural", "wetland"), ("wetland", "saltmarsh")]),
    exact("MGV", &[("natural", "wetland"), ("wetland", "mangrove")]),
    exact("BOG", &[("natural", "wetland"), ("wetland", "bog")]),
    exact("WTLD", &[("natural", "wetland")]),
    exact("WTLDI", &[("natural", "wetland"), ("intermittent", "yes")]),
    exact("MOOR", &[("natural", "heath")]),
    exact("RF", &[("natural", "reef")]),
    exact("RFC", &[("natural", "reef"), ("reef", "coral")]),
    exact("RFSU", &[("natural", "reef"), ("subsea", "reef")]),
    exact("SHOL", &[("natural", "shoal")]),
    exact("SHOLS", &[("natural", "shoal")]),
    exact("BNK", &[("natural", "shoal")]),
    exact("BNKS", &[("natural", "shoal")]),
    exact("DCKD", &[("waterway", "dock"), ("dock", "drydock")]),
    exact("DCK", &[("waterway", "dock")]),
    exact("DCKB", &[("waterway", "dock")]),
    exact("SLCE", &[("waterway", "sluice_gate")]),
    exact("WEIR", &[("waterway", "weir")]),
    exact("LOCK", &[("waterway", "lock_gate")]),
    // Hypsographic
    exact("MT", &[("natural", "peak")]),
    exact("MTS", &[("natural", "mountain_range")]),
    exact("PK", &[("natural", "peak")]),
    exact("PKS", &[("natural", "peak")]),
    exact("HLL", &[("natural", "hill")]),
    exact("HLLS", &[("natural", "hill")]),
    exact("KNLL", &[("natural", "hill")]),
    exact("MND", &[("geomorphology", "mound")]),
    exact("CONE", &[("natural", "peak"), ("geomorphology", "cone")]),
    exact("VLC", &[("natural", "volcano")]),
    exact("CRTR", &[("geomorphology", "crater")]),
    exact("CLDA", &[("geomorphology", "caldera")]),
    exact("RDG", &[("natural", "ridge")]),
    exact("RDGE", &[("natural", "ridge")]),
    exact("SPUR", &[("natural", "ridge")]),
    exact("CLF", &[("natural", "cliff")]),
    exact("ESCP", &[("natural", "cliff")]),
    exact("BLHL", &[("natural", "cliff")]),
    exact("PASS", &[("natural", "saddle"), ("mountain_pass", "yes")]),
    exact("GAP", &[("mountain_pass", "yes")]),
    exact("SDL", &[("natural", "saddle")]),
    family("PT", &[("natural", "cape")]),
    exact("CAPE", &[("natural", "cape")]),
    exact("HDLD", &[("natural", "cape")]),
    exact("PROM", &[("natural", "cape")]),
    family("PEN", &[("natural", "peninsula")]),
    exact("ISTH", &[("natural", "isthmus")]),
    exact("ISL", &[("place", "island")]),
    exact("ISLS", &[("place", "archipelago")]),
    exact("ISLET", &[("place", "islet")]),
    exact("ISLF", &[("place", "island"), ("man_made", "yes")]),
    exact("ISLM", &[("place", "island"), ("wetland", "mangrove")]),
    exact("ISLT", &[("place", "island")]),
    exact("ISLX", &[("place", "locality")]),
    exact("ATOL", &[("place", "island"), ("geomorphology", "atoll")]),
    family("BCH", &[("natural", "beach")]),
    exact("DUNE", &[("natural", "dune")]),
    exact("SAND", &[("natural", "sand")]),
    family("CAVE", &[("natural", "cave_entrance")]),
    exact("SINK", &[("natural", "sinkhole")]),
    exact("DPR", &[("geomorphology", "depression")]),
    family("VAL", &[("natural", "valley")]),
    exact("GRGE", &[("natural", "valley")]),
    exact("CNYN", &[("natural", "valley")]),
    exact("RVN", &[("natural", "valley")]),
    exact("PLAT", &[("natural", "plateau")]),
    exact("PLN", &[("place", "locality")]),
    exact("UPLD", &[("place", "locality")]),
    exact("SLP", &[("place", "locality")]),
    exact("DLTA", &[("geomorphology", "delta")]),
    exact("CST", &[("place", "locality")]),
    exact("RK", &[("natural", "rock")]),
    exact("RKS", &[("natural", "rock")]),
    exact("LEV", &[("man_made", "dyke")]),
    // Vegetation
    exact("FRSTF", &[("natural", "wood"), ("geomorphology", "fossil_forest")]),
    family("FRST", &[("landuse", "forest")]),
    exact("GRVC", &[("landuse", "orchard"), ("produce", "coconuts")]),
    exact("GRVO", &[("landuse", "orchard"), ("produce", "olives")]),
    exact("GRVP", &[("landuse", "orchard"), ("produce", "palm_oil")]),
    exact("GRVPN", &[("landuse", "forest")]),
    exact("OCH", &[("landuse", "orchard")]),
    exact("VIN", &[("landuse", "vineyard")]),
    exact("VINS", &[("landuse", "vineyard")]),
    exact("CULT", &[("landuse", "farmland")]),
    exact("GRSLD", &[("natural", "grassland")]),
    exact("MDW", &[("landuse", "meadow")]),
    exact("CLG", &[("landuse", "meadow")]),
    exact("SCRB", &[("natural", "scrub")]),
    exact("BUSH", &[("natural", "scrub")]),
    exact("HTH", &[("natural", "heath")]),
    exact("TREE", &[("natural", "tree")]),
    // Localities and areas
    exact("LCTY", &[("place", "locality")]),
    exact("AREA", &[("place", "locality")]),
    exact("TRB", &[("place", "locality")]),
    family("RGN", &[("place", "region")]),
    exact("MNA", &[("landuse", "quarry")]),
    exact("OILF", &[("landuse", "industrial"), ("produce", "oil")]),
    exact("GASF", &[("landuse", "industrial"), ("produce", "gas")]),
    exact("COLF", &[("landuse", "industrial"), ("produce", "coal")]),
    exact("INDS", &[("landuse", "industrial")]),
    exact("FLD", &[("landuse", "farmland")]),
    exact("FLDI", &[("landuse", "farmland"), ("irrigated", "yes")]),
    exact("AGRC", &[("landuse", "farmland")]),
    exact("GRAZ", &[("landuse", "meadow")]),
    exact("CMN", &[("landuse", "village_green")]),
    exact("DEVH", &[("landuse", "residential")]),
    exact("CTRB", &[("landuse", "commercial")]),
    exact("MILB", &[("landuse", "military"), ("military", "base")]),
    exact("BTL", &[("historic", "battlefield")]),
    exact("PRK", &[("leisure", "park")]),
    exact("RES", &[("boundary", "protected_area")]),
    exact("RESF", &[("landuse", "forest"), ("boundary", "protected_area")]),
    exact("RESN", &[("leisure", "nature_reserve")]),
    exact("RESW", &[("leisure", "nature_reserve")]),
    exact("RESV", &[("landuse", "reservation")]),
    exact("PRT", &[("landuse", "harbour")]),
    // Routes
    exact("RDCR", &[("junction", "roundabout")]),
    exact("RDJCT", &[("junction", "yes")]),
    exact("RDA", &[("highway", "road"), ("historic", "road")]),
    family("RD", &[("highway", "road")]),
    exact("ST", &[("highway", "residential")]),
    exact("TRL", &[("highway", "path")]),
    exact("STKR", &[("highway", "track")]),
    exact("PRMN", &[("highway", "pedestrian")]),
    exact("CSWY", &[("highway", "road")]),
    exact("FORD", &[("highway", "ford")]),
    exact("TNLRD", &[("highway", "road"), ("tunnel", "yes")]),
    exact("TNLRR", &[("railway", "rail"), ("tunnel", "yes")]),
    exact("TNL", &[("tunnel", "yes")]),
    exact("BDG", &[("man_made", "bridge")]),
    exact("RR", &[("railway", "rail")]),
    exact("RRQ", &[("railway", "abandoned")]),
    exact("RSGNL", &[("railway", "signal")]),
    exact("RJCT", &[("railway", "junction")]),
    exact("RSTN", &[("railway", "station")]),
    exact("RSTNQ", &[("railway", "station"), ("disused", "yes")]),
    exact("RSTP", &[("railway", "halt")]),
    exact("RSTPQ", &[("railway", "halt"), ("disused", "yes")]),
    exact("RYD", &[("landuse", "railway")]),
    exact("BUSTN", &[("amenity", "bus_station")]),
    exact("BUSTP", &[("highway", "bus_stop")]),
    exact("FY", &[("amenity", "ferry_terminal")]),
    // Airports
    exact("AIRB", &[("aeroway", "airfield"), ("landuse", "military"), ("military", "airfield")]),
    exact("AIRF", &[("aeroway", "aerodrome")]),
    exact("AIRP", &[("aeroway", "aerodrome")]),
    exact("AIRH", &[("aeroway", "helipad")]),
    exact("AIRQ", &[("aeroway", "aerodrome"), ("disused", "yes")]),
    exact("AIRS", &[("aeroway", "aerodrome"), ("aerodrome:type", "seaplane")]),
    exact("AIRT", &[("aeroway", "terminal")]),
    // Health and education
    exact("HSPC", &[("amenity", "clinic")]),
    exact("HSPD", &[("amenity", "pharmacy")]),
    family("HSP", &[("amenity", "hospital"), ("building", "yes")]),
    exact("SCHC", &[("amenity", "college")]),
    exact("SCHT", &[("amenity", "college")]),
    exact("SCHM", &[("amenity", "school"), ("landuse", "military")]),
    family("SCH", &[("amenity", "school"), ("building", "yes")]),
    exact("UNIV", &[("amenity", "university")]),
    exact("ITTR", &[("amenity", "research_institute")]),
    exact("LIBR", &[("amenity", "library")]),
    // Religion
    exact("CH", &[("amenity", "place_of_worship"), ("religion", "christian")]),
    exact("CTRR", &[("amenity", "place_of_worship")]),
    exact("MSQE", &[("amenity", "place_of_worship"), ("religion", "muslim")]),
    exact("MSSN", &[("amenity", "place_of_worship"), ("religion", "christian")]),
    exact("MSTY", &[("amenity", "place_of_worship"), ("building", "monastery")]),
    exact("CVNT", &[("amenity", "place_of_worship"), ("building", "convent")]),
    exact("PGDA", &[("amenity", "place_of_worship"), ("religion", "buddhist")]),
    exact("TMPL", &[("amenity", "place_of_worship")]),
    exact("SHRN", &[("historic", "wayside_shrine")]),
    exact("CMTY", &[("landuse", "cemetery")]),
    exact("GRVE", &[("historic", "tomb")]),
    exact("TMB", &[("historic", "tomb")]),
    // Historic
    exact("RUIN", &[("historic", "ruins")]),
    exact("HSTS", &[("historic", "yes")]),
    exact("MNMT", &[("historic", "monument")]),
    exact("ANS", &[("historic", "archaeological_site")]),
    exact("CSTL", &[("historic", "castle")]),
    exact("FT", &[("historic", "fort")]),
    exact("WALLA", &[("historic", "city_wall")]),
    exact("PAL", &[("building", "palace")]),
    // Mines
    exact("MNQR", &[("landuse", "quarry")]),
    exact("MNQ", &[("man_made", "mine"), ("disused", "yes")]),
    exact("MNAU", &[("man_made", "mine"), ("mine_ore", "gold")]),
    exact("MNAG", &[("man_made", "mine"), ("mine_ore", "silver")]),
    exact("MNC", &[("man_made", "mine"), ("mine_ore", "coal")]),
    exact("MNCR", &[("man_made", "mine"), ("mine_ore", "chromite")]),
    exact("MNCU", &[("man_made", "mine"), ("mine_ore", "copper")]),
    exact("MNDT", &[("man_made", "mine"), ("mine_ore", "diamond")]),
    exact("MNFE", &[("man_made", "mine"), ("mine_ore", "iron")]),
    exact("MNMN", &[("man_made", "mine"), ("mine_ore", "manganese")]),
    exact("MNNI", &[("man_made", "mine"), ("mine_ore", "nickel")]),
    exact("MNPB", &[("man_made", "mine"), ("mine_ore", "lead")]),
    exact("MNSN", &[("man_made", "mine"), ("mine_ore", "tin")]),
    exact("MNN", &[("man_made", "mine"), ("mine_ore", "salt")]),
    family("MN", &[("man_made", "mine")]),
    // Industry and utilities
    exact("MLSG", &[("man_made", "works"), ("produce", "sugar")]),
    exact("MLSGQ", &[("man_made", "works"), ("produce", "sugar"), ("disused", "yes")]),
    exact("MLSW", &[("man_made", "works"), ("produce", "timber")]),
    exact("MLO", &[("man_made", "works"), ("produce", "olive_oil")]),
    exact("MLR", &[("man_made", "works"), ("produce", "rice")]),
    exact("MLWND", &[("man_made", "windmill")]),
    exact("MLWTR", &[("man_made", "watermill")]),
    family("ML", &[("man_made", "works")]),
    exact("MFGSG", &[("man_made", "works"), ("produce", "sugar")]),
    exact("MFGC", &[("man_made", "works"), ("produce", "canned_food")]),
    family("MFG", &[("man_made", "works"), ("landuse", "industrial")]),
    exact("FCTY", &[("man_made", "works"), ("landuse", "industrial")]),
    exact("OILR", &[("man_made", "works"), ("landuse", "industrial"), ("produce", "oil")]),
    exact("OILW", &[("man_made", "petroleum_well")]),
    exact("OILT", &[("man_made", "storage_tank"), ("content", "oil")]),
    exact("OILP", &[("man_made", "pipeline")]),
    exact("PS", &[("power", "plant")]),
    exact("PSH", &[("power", "plant"), ("plant:source", "hydro")]),
    exact("PSN", &[("power", "plant"), ("plant:source", "nuclear")]),
    exact("PMPW", &[("man_made", "water_works")]),
    exact("WTRW", &[("man_made", "water_works")]),
    exact("WTRT", &[("man_made", "water_tower")]),
    exact("SWT", &[("man_made", "wastewater_plant")]),
    exact("DAM", &[("waterway", "dam")]),
    exact("DAMQ", &[("waterway", "dam"), ("disused", "yes")]),
    exact("DAMSB", &[("waterway", "dam")]),
    exact("NSY", &[("landuse", "plant_nursery")]),
    exact("CRRL", &[("landuse", "farmyard")]),
    exact("SHPF", &[("landuse", "farmyard")]),
    exact("AGRF", &[("landuse", "farmyard")]),
    // Maritime structures
    exact("PIER", &[("man_made", "pier")]),
    exact("JTY", &[("man_made", "pier")]),
    exact("WHRF", &[("man_made", "pier")]),
    exact("QUAY", &[("man_made", "pier")]),
    exact("BRKW", &[("man_made", "breakwater")]),
    exact("SEAWL", &[("barrier", "sea_wall")]),
    exact("MAR", &[("leisure", "marina")]),
    exact("LTHSE", &[("man_made", "lighthouse")]),
    exact("BCN", &[("man_made", "beacon")]),
    exact("TOWR", &[("man_made", "tower")]),
    // Stations
    exact("STNM", &[("man_made", "monitoring_station")]),
    exact("STNR", &[("man_made", "mast")]),
    exact("STNS", &[("man_made", "satellite_dish")]),
    exact("STNE", &[("amenity", "research_institute")]),
    exact("STNB", &[("amenity", "research_institute")]),
    exact("STNC", &[("amenity", "coast_guard")]),
    exact("STNF", &[("landuse", "forest"), ("building", "yes")]),
    // Government and military
    exact("ADMF", &[("office", "government")]),
    exact("GOVL", &[("amenity", "townhall")]),
    exact("CTHSE", &[("amenity", "courthouse")]),
    exact("PRN", &[("amenity", "prison")]),
    exact("PO", &[("amenity", "post_office")]),
    exact("PP", &[("amenity", "police")]),
    exact("PSTB", &[("barrier", "border_control")]),
    exact("PSTC", &[("barrier", "border_control")]),
    exact("INSM", &[("landuse", "military")]),
    exact("BRKS", &[("landuse", "military"), ("military", "barracks")]),
    exact("NVB", &[("landuse", "military"), ("military", "naval_base")]),
    // Commerce and leisure
    exact("MKT", &[("amenity", "marketplace")]),
    exact("MALL", &[("shop", "mall")]),
    exact("BANK", &[("amenity", "bank")]),
    exact("HTL", &[("tourism", "hotel")]),
    exact("GHSE", &[("tourism", "guest_house")]),
    exact("RHSE", &[("tourism", "guest_house")]),
    exact("REST", &[("amenity", "restaurant")]),
    exact("CSNO", &[("amenity", "casino")]),
    exact("RSRT", &[("leisure", "resort")]),
    exact("SPA", &[("amenity", "spa")]),
    exact("MUS", &[("tourism", "museum")]),
    exact("THTR", &[("amenity", "theatre")]),
    exact("STDM", &[("leisure", "stadium")]),
    exact("ZOO", &[("tourism", "zoo")]),
    exact("GDN", &[("leisure", "garden")]),
    exact("RECG", &[("leisure", "golf_course")]),
    exact("RECR", &[("leisure", "track")]),
    exact("SQR", &[("place", "square")]),
    family("CMP", &[("tourism", "camp_site")]),
    // Buildings
    exact("BLDG", &[("building", "yes")]),
    exact("BLDO", &[("building", "office")]),
    exact("HSE", &[("building", "house")]),
    exact("HSEC", &[("building", "house")]),
    exact("HUT", &[("building", "hut")]),
    exact("HUTS", &[("building", "hut")]),
    exact("FCL", &[("building", "yes")]),
    // Unreachable: both codes are already claimed by the PT family above.
    exact("PT", &[("natural", "point")]),
    exact("PTGE", &[("highway", "track")]),
];
